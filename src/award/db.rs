use rusqlite::Connection;

pub mod read;
pub mod write;

pub fn initialise_tables(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        -- Append-only: regenerating awards adds rows rather than replacing them
        CREATE TABLE IF NOT EXISTS awards (
            id INTEGER PRIMARY KEY,
            season_id INTEGER NOT NULL,
            team_id INTEGER NOT NULL,
            player_id INTEGER NOT NULL,
            kind TEXT NOT NULL,
            value INTEGER NOT NULL,
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_awards_team_season ON awards(team_id, season_id);
        CREATE INDEX IF NOT EXISTS idx_awards_player ON awards(player_id);
        ",
    )
}
