use rusqlite::Connection;

pub mod read;
pub mod write;

pub fn initialise_tables(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        -- `state`/`state_period` hold the persisted `MatchState`; the remaining progress columns
        -- are kept for display and mirror the period table, which is authoritative
        CREATE TABLE IF NOT EXISTS matches (
            id INTEGER PRIMARY KEY,
            team_id INTEGER NOT NULL,
            opponent TEXT NOT NULL,
            kickoff TEXT NOT NULL,
            venue TEXT NOT NULL,
            total_periods INTEGER NOT NULL,
            period_minutes INTEGER NOT NULL,
            current_period INTEGER NOT NULL DEFAULT 0,
            total_elapsed_secs INTEGER NOT NULL DEFAULT 0,
            is_started INTEGER NOT NULL DEFAULT 0,
            is_completed INTEGER NOT NULL DEFAULT 0,
            state TEXT NOT NULL DEFAULT 'not_started',
            state_period INTEGER,
            team_score INTEGER,
            opponent_score INTEGER
        );
        CREATE INDEX IF NOT EXISTS idx_matches_team ON matches(team_id);

        CREATE TABLE IF NOT EXISTS match_periods (
            id INTEGER PRIMARY KEY,
            match_id INTEGER NOT NULL,
            period_number INTEGER NOT NULL,
            started_at TEXT NOT NULL,
            ended_at TEXT,
            elapsed_secs INTEGER NOT NULL DEFAULT 0,
            is_active INTEGER NOT NULL DEFAULT 1,
            is_completed INTEGER NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_match_periods_match ON match_periods(match_id);
        ",
    )
}
