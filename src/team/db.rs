use rusqlite::Connection;

pub mod read;
pub mod write;

pub fn initialise_tables(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS teams (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            age_group TEXT,
            created_at TEXT NOT NULL
        );

        -- Shirt numbers are unique per team; enforced in `AddPlayer` before the write so the
        -- coach gets a readable message
        CREATE TABLE IF NOT EXISTS players (
            id INTEGER PRIMARY KEY,
            team_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            shirt_number INTEGER NOT NULL,
            position TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_players_team ON players(team_id);
        ",
    )
}
