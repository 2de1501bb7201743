use rusqlite::{Connection, OptionalExtension as _, Result, Row, params};

use crate::db::DbRequest;
use crate::stats::types::{PlayerStats, StatLine};
use crate::team::types::Player;

fn stats_from_row(row: &Row) -> Result<PlayerStats> {
    Ok(PlayerStats {
        id: row.get("id")?,
        player_id: row.get("player_id")?,
        season_id: row.get("season_id")?,
        goals: row.get("goals")?,
        assists: row.get("assists")?,
        yellow_cards: row.get("yellow_cards")?,
        red_cards: row.get("red_cards")?,
    })
}

/// Season rows of a team's players in creation order, which is the order award tie-breaks use.
pub fn stats_of_team(conn: &Connection, team_id: i64, season_id: i64) -> Result<Vec<StatLine>> {
    let mut statement = conn.prepare(
        "
        SELECT
            ps.id, ps.player_id, ps.season_id, ps.goals, ps.assists, ps.yellow_cards, ps.red_cards,
            p.team_id, p.name, p.shirt_number, p.position
        FROM player_stats ps
        JOIN players p ON p.id = ps.player_id
        WHERE p.team_id=?1 AND ps.season_id=?2
        ORDER BY ps.id
        ",
    )?;

    statement
        .query_map(params![team_id, season_id], |row| {
            let stats = stats_from_row(row)?;
            Ok(StatLine {
                player: Player {
                    id: stats.player_id,
                    team_id: row.get("team_id")?,
                    name: row.get("name")?,
                    shirt_number: row.get("shirt_number")?,
                    position: row.get("position")?,
                },
                stats,
            })
        })?
        .collect()
}

pub struct GetPlayerStats {
    pub player_id: i64,
    pub season_id: i64,
}
impl DbRequest for GetPlayerStats {
    type ReturnValue = Result<Option<PlayerStats>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        conn.query_one(
            "
            SELECT id, player_id, season_id, goals, assists, yellow_cards, red_cards
            FROM player_stats
            WHERE player_id=?1 AND season_id=?2
            ",
            params![self.player_id, self.season_id],
            stats_from_row,
        )
        .optional()
    }
}

pub struct ListSeasonStats {
    pub team_id: i64,
    pub season_id: i64,
}
impl DbRequest for ListSeasonStats {
    type ReturnValue = Result<Vec<StatLine>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        stats_of_team(conn, self.team_id, self.season_id)
    }
}
