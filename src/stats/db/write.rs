use rusqlite::{Connection, params};
use tracing::debug;

use crate::event::types::StatCategory;
use crate::stats::types::StatAction;

/// Moves one counter of a player's season row by one, creating the row zeroed on first use.
/// Counters saturate at zero.
pub fn apply_event(
    conn: &Connection,
    player_id: i64,
    season_id: i64,
    category: StatCategory,
    action: StatAction,
) -> Result<(), rusqlite::Error> {
    conn.execute(
        "
        INSERT INTO player_stats (player_id, season_id)
        VALUES (?1, ?2)
        ON CONFLICT(player_id, season_id) DO NOTHING
        ",
        params![player_id, season_id],
    )?;

    let column = category.column();
    conn.execute(
        &format!(
            "
            UPDATE player_stats
            SET {column}=MAX({column} + ?3, 0)
            WHERE player_id=?1 AND season_id=?2
            "
        ),
        params![player_id, season_id, action.delta()],
    )?;

    debug!("{action:?} {category} for player {player_id} in season {season_id}");
    Ok(())
}
