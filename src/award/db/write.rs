use anyhow::{anyhow, bail};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};
use tracing::info;

use crate::award::types::{Award, pick_awards};
use crate::db::DbRequest;
use crate::error::UserError;
use crate::season::db::read::get_season;
use crate::stats::db::read::stats_of_team;
use crate::team::db::read::get_team;

/// Derives the season awards from the current statistics and appends them. Earlier awards for
/// the same season are left in place, so running this twice stores every award twice.
pub struct GenerateSeasonAwards {
    pub season_id: i64,
    pub team_id: i64,
    pub at: DateTime<Utc>,
}
impl DbRequest for GenerateSeasonAwards {
    type ReturnValue = anyhow::Result<Vec<Award>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let transaction = conn.transaction()?;

        if get_season(&transaction, self.season_id)?.is_none() {
            bail!(UserError(anyhow!("Season {} does not exist", self.season_id)));
        }
        if get_team(&transaction, self.team_id)?.is_none() {
            bail!(UserError(anyhow!("Team {} does not exist", self.team_id)));
        }

        let lines = stats_of_team(&transaction, self.team_id, self.season_id)?;

        let mut awards = Vec::new();
        for pick in pick_awards(&lines) {
            transaction.execute(
                "
                INSERT INTO awards (season_id, team_id, player_id, kind, value, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ",
                params![
                    self.season_id,
                    self.team_id,
                    pick.player_id,
                    pick.kind,
                    pick.value,
                    self.at
                ],
            )?;
            awards.push(Award {
                id: transaction.last_insert_rowid(),
                season_id: self.season_id,
                team_id: self.team_id,
                player_id: pick.player_id,
                kind: pick.kind,
                value: pick.value,
                created_at: self.at,
            });
        }

        transaction.commit()?;
        info!(
            "Generated {} award(s) for team {} in season {}",
            awards.len(),
            self.team_id,
            self.season_id
        );
        Ok(awards)
    }
}
