use rusqlite::{Connection, OptionalExtension as _, Result, Row, params};

use crate::db::DbRequest;
use crate::season::types::Season;

fn season_from_row(row: &Row) -> Result<Season> {
    Ok(Season {
        id: row.get("id")?,
        name: row.get("name")?,
        starts_on: row.get("starts_on")?,
        ends_on: row.get("ends_on")?,
        is_current: row.get("is_current")?,
    })
}

pub fn current_season(conn: &Connection) -> Result<Option<Season>> {
    conn.query_one(
        "
        SELECT id, name, starts_on, ends_on, is_current
        FROM seasons
        WHERE is_current=1
        ORDER BY id DESC
        LIMIT 1
        ",
        [],
        season_from_row,
    )
    .optional()
}

pub fn get_season(conn: &Connection, id: i64) -> Result<Option<Season>> {
    conn.query_one(
        "SELECT id, name, starts_on, ends_on, is_current FROM seasons WHERE id=?1",
        params![id],
        season_from_row,
    )
    .optional()
}

pub struct GetCurrentSeason;
impl DbRequest for GetCurrentSeason {
    type ReturnValue = Result<Option<Season>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        current_season(conn)
    }
}

pub struct GetSeason {
    pub id: i64,
}
impl DbRequest for GetSeason {
    type ReturnValue = Result<Option<Season>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        get_season(conn, self.id)
    }
}

pub struct ListSeasons;
impl DbRequest for ListSeasons {
    type ReturnValue = Result<Vec<Season>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let mut statement = conn.prepare(
            "
            SELECT id, name, starts_on, ends_on, is_current
            FROM seasons
            ORDER BY starts_on DESC, id DESC
            ",
        )?;

        statement.query_map([], season_from_row)?.collect()
    }
}
