use rusqlite::{Connection, Result, params};

use crate::award::types::Award;
use crate::db::DbRequest;

pub struct ListAwards {
    pub season_id: i64,
    pub team_id: i64,
}
impl DbRequest for ListAwards {
    type ReturnValue = Result<Vec<Award>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let mut statement = conn.prepare(
            "
            SELECT id, season_id, team_id, player_id, kind, value, created_at
            FROM awards
            WHERE team_id=?1 AND season_id=?2
            ORDER BY id
            ",
        )?;

        statement
            .query_map(params![self.team_id, self.season_id], |row| {
                Ok(Award {
                    id: row.get("id")?,
                    season_id: row.get("season_id")?,
                    team_id: row.get("team_id")?,
                    player_id: row.get("player_id")?,
                    kind: row.get("kind")?,
                    value: row.get("value")?,
                    created_at: row.get("created_at")?,
                })
            })?
            .collect()
    }
}
