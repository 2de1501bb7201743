use chrono::{DateTime, Utc};

use crate::event::db::write::RecordEvent;
use crate::event::types::EventType;

/// An event whose type (and player, when one is needed) has been chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEvent {
    pub event_type: EventType,
    pub player_id: Option<i64>,
}

impl PendingEvent {
    pub fn into_request(
        self,
        match_id: i64,
        period_number: u32,
        elapsed_secs: i64,
        at: DateTime<Utc>,
    ) -> RecordEvent {
        RecordEvent {
            match_id,
            event_type_id: self.event_type.id,
            player_id: self.player_id,
            period_number,
            elapsed_secs,
            at,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    Record(PendingEvent),
    AwaitingPlayer,
}

/// Two-step picker for recording an event: team events are ready as soon as their type is
/// chosen, player events wait for a player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventSelection {
    #[default]
    Idle,
    AwaitingPlayer(EventType),
}

impl EventSelection {
    /// Choosing a type replaces any half-finished selection.
    pub fn select_event_type(&mut self, event_type: EventType) -> SelectionOutcome {
        if event_type.requires_player {
            *self = EventSelection::AwaitingPlayer(event_type);
            SelectionOutcome::AwaitingPlayer
        } else {
            *self = EventSelection::Idle;
            SelectionOutcome::Record(PendingEvent {
                event_type,
                player_id: None,
            })
        }
    }

    /// Completes a player event. Returns `None` when no event type is waiting for a player.
    pub fn select_player(&mut self, player_id: i64) -> Option<PendingEvent> {
        match std::mem::take(self) {
            EventSelection::AwaitingPlayer(event_type) => Some(PendingEvent {
                event_type,
                player_id: Some(player_id),
            }),
            EventSelection::Idle => None,
        }
    }

    pub fn cancel(&mut self) -> Option<EventType> {
        match std::mem::take(self) {
            EventSelection::AwaitingPlayer(event_type) => Some(event_type),
            EventSelection::Idle => None,
        }
    }
}
