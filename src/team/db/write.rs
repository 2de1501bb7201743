use anyhow::{Context as _, anyhow, bail};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension as _, params};
use tracing::{info, warn};

use crate::db::DbRequest;
use crate::error::UserError;
use crate::team::db::read::{get_player, get_team};
use crate::team::types::{Player, Team};

pub struct CreateTeam {
    pub name: String,
    pub age_group: Option<String>,
    pub at: DateTime<Utc>,
}
impl DbRequest for CreateTeam {
    type ReturnValue = anyhow::Result<Team>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            bail!(UserError(anyhow!("Team name cannot be empty")));
        }
        let age_group = self
            .age_group
            .map(|group| group.trim().to_string())
            .filter(|group| !group.is_empty());

        conn.execute(
            "INSERT INTO teams (name, age_group, created_at) VALUES (?1, ?2, ?3)",
            params![name, age_group, self.at],
        )?;

        let team = Team {
            id: conn.last_insert_rowid(),
            name,
            age_group,
            created_at: self.at,
        };
        info!("Created team {} ({})", team.id, team.name);
        Ok(team)
    }
}

/// Removes a team and everything that belongs to it.
pub struct DeleteTeam {
    pub id: i64,
}
impl DbRequest for DeleteTeam {
    type ReturnValue = anyhow::Result<bool>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let transaction = conn.transaction()?;

        if get_team(&transaction, self.id)?.is_none() {
            warn!("Attempted to delete unknown team {}", self.id);
            return Ok(false);
        }

        let match_ids: Vec<i64> = transaction
            .prepare("SELECT id FROM matches WHERE team_id=?1")?
            .query_map(params![self.id], |row| row.get("id"))?
            .collect::<Result<_, _>>()?;
        for match_id in match_ids {
            crate::fixture::db::write::delete_match_cascade(&transaction, match_id)
                .context("Failed to delete the team's matches")?;
        }

        for statement in [
            "DELETE FROM player_stats WHERE player_id IN (SELECT id FROM players WHERE team_id=?1)",
            "DELETE FROM awards WHERE team_id=?1",
            "DELETE FROM event_types WHERE team_id=?1",
            "DELETE FROM players WHERE team_id=?1",
            "DELETE FROM teams WHERE id=?1",
        ] {
            transaction.execute(statement, params![self.id])?;
        }

        transaction.commit()?;
        info!("Deleted team {} with all of its records", self.id);
        Ok(true)
    }
}

pub struct AddPlayer {
    pub team_id: i64,
    pub name: String,
    pub shirt_number: u32,
    pub position: Option<String>,
}
impl DbRequest for AddPlayer {
    type ReturnValue = anyhow::Result<Player>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            bail!(UserError(anyhow!("Player name cannot be empty")));
        }

        let transaction = conn.transaction()?;

        if get_team(&transaction, self.team_id)?.is_none() {
            bail!(UserError(anyhow!("Team {} does not exist", self.team_id)));
        }

        let taken_by: Option<String> = transaction
            .query_one(
                "SELECT name FROM players WHERE team_id=?1 AND shirt_number=?2",
                params![self.team_id, self.shirt_number],
                |row| row.get("name"),
            )
            .optional()?;
        if let Some(other) = taken_by {
            bail!(UserError(anyhow!(
                "Shirt number {} is already worn by {other}",
                self.shirt_number
            )));
        }

        let position = self
            .position
            .map(|position| position.trim().to_string())
            .filter(|position| !position.is_empty());

        transaction.execute(
            "
            INSERT INTO players (team_id, name, shirt_number, position)
            VALUES (?1, ?2, ?3, ?4)
            ",
            params![self.team_id, name, self.shirt_number, position],
        )?;
        let player = Player {
            id: transaction.last_insert_rowid(),
            team_id: self.team_id,
            name,
            shirt_number: self.shirt_number,
            position,
        };

        transaction.commit()?;
        info!("Added player {player} to team {}", self.team_id);
        Ok(player)
    }
}

/// Removes a player together with their events, statistics and awards.
pub struct RemovePlayer {
    pub id: i64,
}
impl DbRequest for RemovePlayer {
    type ReturnValue = anyhow::Result<bool>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let transaction = conn.transaction()?;

        let Some(player) = get_player(&transaction, self.id)? else {
            warn!("Attempted to remove unknown player {}", self.id);
            return Ok(false);
        };

        for statement in [
            "DELETE FROM match_events WHERE player_id=?1",
            "DELETE FROM player_stats WHERE player_id=?1",
            "DELETE FROM awards WHERE player_id=?1",
            "DELETE FROM players WHERE id=?1",
        ] {
            transaction.execute(statement, params![self.id])?;
        }

        transaction.commit()?;
        info!("Removed player {player} from team {}", player.team_id);
        Ok(true)
    }
}
