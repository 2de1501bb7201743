use rusqlite::Connection;

pub mod read;
pub mod write;

pub fn initialise_tables(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        -- Per-team catalogue driving the live event buttons; `category` is NULL for event types
        -- that do not feed a statistic
        CREATE TABLE IF NOT EXISTS event_types (
            id INTEGER PRIMARY KEY,
            team_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            icon TEXT NOT NULL DEFAULT '',
            color TEXT NOT NULL DEFAULT '',
            requires_player INTEGER NOT NULL,
            is_positive INTEGER NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            sort_order INTEGER NOT NULL DEFAULT 0,
            category TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_event_types_team ON event_types(team_id);

        -- Append-only apart from `sync_status`; `category` and `season_id` are snapshots taken
        -- when the event was recorded
        CREATE TABLE IF NOT EXISTS match_events (
            id INTEGER PRIMARY KEY,
            match_id INTEGER NOT NULL,
            event_type_id INTEGER NOT NULL,
            player_id INTEGER,
            period_number INTEGER NOT NULL,
            elapsed_secs INTEGER NOT NULL,
            recorded_at TEXT NOT NULL,
            sync_status TEXT NOT NULL DEFAULT 'pending',
            category TEXT,
            season_id INTEGER
        );
        CREATE INDEX IF NOT EXISTS idx_match_events_match ON match_events(match_id);
        CREATE INDEX IF NOT EXISTS idx_match_events_player ON match_events(player_id);
        CREATE INDEX IF NOT EXISTS idx_match_events_type ON match_events(event_type_id);
        ",
    )
}
