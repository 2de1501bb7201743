use rusqlite::{Connection, OptionalExtension as _, Result, Row, params};

use crate::db::DbRequest;
use crate::event::types::{EventType, MatchEvent};

const EVENT_TYPE_COLUMNS: &str =
    "id, team_id, name, icon, color, requires_player, is_positive, is_active, sort_order, category";

const EVENT_COLUMNS: &str = "
    id, match_id, event_type_id, player_id, period_number, elapsed_secs, recorded_at,
    sync_status, category, season_id
";

fn event_type_from_row(row: &Row) -> Result<EventType> {
    Ok(EventType {
        id: row.get("id")?,
        team_id: row.get("team_id")?,
        name: row.get("name")?,
        icon: row.get("icon")?,
        color: row.get("color")?,
        requires_player: row.get("requires_player")?,
        is_positive: row.get("is_positive")?,
        is_active: row.get("is_active")?,
        sort_order: row.get("sort_order")?,
        category: row.get("category")?,
    })
}

fn event_from_row(row: &Row) -> Result<MatchEvent> {
    Ok(MatchEvent {
        id: row.get("id")?,
        match_id: row.get("match_id")?,
        event_type_id: row.get("event_type_id")?,
        player_id: row.get("player_id")?,
        period_number: row.get("period_number")?,
        elapsed_secs: row.get("elapsed_secs")?,
        recorded_at: row.get("recorded_at")?,
        sync_status: row.get("sync_status")?,
        category: row.get("category")?,
        season_id: row.get("season_id")?,
    })
}

pub fn get_event_type(conn: &Connection, id: i64) -> Result<Option<EventType>> {
    conn.query_one(
        &format!("SELECT {EVENT_TYPE_COLUMNS} FROM event_types WHERE id=?1"),
        params![id],
        event_type_from_row,
    )
    .optional()
}

pub fn get_event(conn: &Connection, id: i64) -> Result<Option<MatchEvent>> {
    conn.query_one(
        &format!("SELECT {EVENT_COLUMNS} FROM match_events WHERE id=?1"),
        params![id],
        event_from_row,
    )
    .optional()
}

pub fn events_of_match(conn: &Connection, match_id: i64) -> Result<Vec<MatchEvent>> {
    let mut statement = conn.prepare(&format!(
        "
        SELECT {EVENT_COLUMNS}
        FROM match_events
        WHERE match_id=?1
        ORDER BY period_number, elapsed_secs, id
        "
    ))?;

    statement
        .query_map(params![match_id], event_from_row)?
        .collect()
}

pub struct GetEventType {
    pub id: i64,
}
impl DbRequest for GetEventType {
    type ReturnValue = Result<Option<EventType>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        get_event_type(conn, self.id)
    }
}

/// The team's catalogue in button order.
pub struct ListEventTypes {
    pub team_id: i64,
    pub active_only: bool,
}
impl DbRequest for ListEventTypes {
    type ReturnValue = Result<Vec<EventType>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let mut statement = conn.prepare(&format!(
            "
            SELECT {EVENT_TYPE_COLUMNS}
            FROM event_types
            WHERE team_id=?1 AND (is_active=1 OR ?2=0)
            ORDER BY sort_order, id
            "
        ))?;

        statement
            .query_map(params![self.team_id, self.active_only], event_type_from_row)?
            .collect()
    }
}

pub struct ListMatchEvents {
    pub match_id: i64,
}
impl DbRequest for ListMatchEvents {
    type ReturnValue = Result<Vec<MatchEvent>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        events_of_match(conn, self.match_id)
    }
}
