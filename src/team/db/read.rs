use rusqlite::{Connection, OptionalExtension as _, Result, Row, params};

use crate::db::DbRequest;
use crate::team::types::{Player, Team};

fn team_from_row(row: &Row) -> Result<Team> {
    Ok(Team {
        id: row.get("id")?,
        name: row.get("name")?,
        age_group: row.get("age_group")?,
        created_at: row.get("created_at")?,
    })
}

fn player_from_row(row: &Row) -> Result<Player> {
    Ok(Player {
        id: row.get("id")?,
        team_id: row.get("team_id")?,
        name: row.get("name")?,
        shirt_number: row.get("shirt_number")?,
        position: row.get("position")?,
    })
}

pub fn get_team(conn: &Connection, id: i64) -> Result<Option<Team>> {
    conn.query_one(
        "SELECT id, name, age_group, created_at FROM teams WHERE id=?1",
        params![id],
        team_from_row,
    )
    .optional()
}

pub fn get_player(conn: &Connection, id: i64) -> Result<Option<Player>> {
    conn.query_one(
        "SELECT id, team_id, name, shirt_number, position FROM players WHERE id=?1",
        params![id],
        player_from_row,
    )
    .optional()
}

pub fn players_of_team(conn: &Connection, team_id: i64) -> Result<Vec<Player>> {
    let mut statement = conn.prepare(
        "
        SELECT id, team_id, name, shirt_number, position
        FROM players
        WHERE team_id=?1
        ORDER BY shirt_number, id
        ",
    )?;

    statement
        .query_map(params![team_id], player_from_row)?
        .collect()
}

pub struct GetTeam {
    pub id: i64,
}
impl DbRequest for GetTeam {
    type ReturnValue = Result<Option<Team>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        get_team(conn, self.id)
    }
}

pub struct ListTeams;
impl DbRequest for ListTeams {
    type ReturnValue = Result<Vec<Team>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let mut statement =
            conn.prepare("SELECT id, name, age_group, created_at FROM teams ORDER BY name, id")?;

        statement.query_map([], team_from_row)?.collect()
    }
}

pub struct GetPlayer {
    pub id: i64,
}
impl DbRequest for GetPlayer {
    type ReturnValue = Result<Option<Player>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        get_player(conn, self.id)
    }
}

pub struct ListPlayers {
    pub team_id: i64,
}
impl DbRequest for ListPlayers {
    type ReturnValue = Result<Vec<Player>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        players_of_team(conn, self.team_id)
    }
}
