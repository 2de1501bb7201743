use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::fixture::clock::format_clock;
use crate::shared::types::text_enum;

/// The statistic counter an event type feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    Goal,
    Assist,
    YellowCard,
    RedCard,
}

text_enum!(StatCategory, "statistic category", {
    Goal => "goal",
    Assist => "assist",
    YellowCard => "yellow_card",
    RedCard => "red_card",
});

impl StatCategory {
    /// Name-based classification kept for compatibility with event types that predate the
    /// explicit category: the first matching substring wins, case-insensitively.
    pub fn classify(name: &str) -> Option<Self> {
        let name = name.to_lowercase();

        if name.contains("goal") {
            Some(StatCategory::Goal)
        } else if name.contains("assist") {
            Some(StatCategory::Assist)
        } else if name.contains("yellow") {
            Some(StatCategory::YellowCard)
        } else if name.contains("red") {
            Some(StatCategory::RedCard)
        } else {
            None
        }
    }

    /// Column of `player_stats` holding this counter.
    pub fn column(self) -> &'static str {
        match self {
            StatCategory::Goal => "goals",
            StatCategory::Assist => "assists",
            StatCategory::YellowCard => "yellow_cards",
            StatCategory::RedCard => "red_cards",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    Pending,
    Synced,
    Failed,
}

text_enum!(SyncStatus, "sync status", {
    Pending => "pending",
    Synced => "synced",
    Failed => "failed",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventType {
    pub id: i64,
    pub team_id: i64,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub requires_player: bool,
    pub is_positive: bool,
    pub is_active: bool,
    pub sort_order: i64,
    pub category: Option<StatCategory>,
}

impl Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} {}", self.id, self.icon, self.name)?;
        if let Some(category) = self.category {
            write!(f, " ({category})")?;
        }
        if self.requires_player {
            f.write_str(" - needs player")?;
        }
        if !self.is_active {
            f.write_str(" - hidden")?;
        }
        Ok(())
    }
}

/// Template for the catalogue a new team starts with.
pub struct EventTypeTemplate {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub requires_player: bool,
    pub is_positive: bool,
    pub category: Option<StatCategory>,
}

pub const DEFAULT_EVENT_TYPES: &[EventTypeTemplate] = &[
    EventTypeTemplate {
        name: "Goal",
        icon: "⚽",
        color: "#16a34a",
        requires_player: true,
        is_positive: true,
        category: Some(StatCategory::Goal),
    },
    EventTypeTemplate {
        name: "Assist",
        icon: "🅰",
        color: "#2563eb",
        requires_player: true,
        is_positive: true,
        category: Some(StatCategory::Assist),
    },
    EventTypeTemplate {
        name: "Shot",
        icon: "🎯",
        color: "#0891b2",
        requires_player: true,
        is_positive: true,
        category: None,
    },
    EventTypeTemplate {
        name: "Save",
        icon: "🧤",
        color: "#7c3aed",
        requires_player: true,
        is_positive: true,
        category: None,
    },
    EventTypeTemplate {
        name: "Corner",
        icon: "🚩",
        color: "#64748b",
        requires_player: false,
        is_positive: true,
        category: None,
    },
    EventTypeTemplate {
        name: "Substitution",
        icon: "🔁",
        color: "#64748b",
        requires_player: true,
        is_positive: true,
        category: None,
    },
    EventTypeTemplate {
        name: "Yellow Card",
        icon: "🟨",
        color: "#eab308",
        requires_player: true,
        is_positive: false,
        category: Some(StatCategory::YellowCard),
    },
    EventTypeTemplate {
        name: "Red Card",
        icon: "🟥",
        color: "#dc2626",
        requires_player: true,
        is_positive: false,
        category: Some(StatCategory::RedCard),
    },
    EventTypeTemplate {
        name: "Goal Conceded",
        icon: "🥅",
        color: "#dc2626",
        requires_player: false,
        is_positive: false,
        category: None,
    },
];

/// A single occurrence during a match. Only `sync_status` changes after creation.
///
/// `category` and `season_id` are captured when the event is recorded so that deleting it
/// reverses exactly the counter it bumped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEvent {
    pub id: i64,
    pub match_id: i64,
    pub event_type_id: i64,
    pub player_id: Option<i64>,
    pub period_number: u32,
    pub elapsed_secs: i64,
    pub recorded_at: DateTime<Utc>,
    pub sync_status: SyncStatus,
    pub category: Option<StatCategory>,
    pub season_id: Option<i64>,
}

impl Display for MatchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] P{} {} type {}",
            self.id,
            self.period_number,
            format_clock(self.elapsed_secs),
            self.event_type_id
        )?;
        match self.player_id {
            Some(player_id) => write!(f, " player {player_id}")?,
            None => f.write_str(" team")?,
        }
        write!(f, " ({})", self.sync_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_substring_based() {
        assert_eq!(StatCategory::classify("Goal"), Some(StatCategory::Goal));
        assert_eq!(StatCategory::classify("Header GOAL"), Some(StatCategory::Goal));
        assert_eq!(StatCategory::classify("Assist"), Some(StatCategory::Assist));
        assert_eq!(
            StatCategory::classify("Yellow Card"),
            Some(StatCategory::YellowCard)
        );
        assert_eq!(StatCategory::classify("Red Card"), Some(StatCategory::RedCard));
        assert_eq!(StatCategory::classify("Corner"), None);
        assert_eq!(StatCategory::classify("Save"), None);
    }

    #[test]
    fn classification_takes_first_match() {
        // "Goal Conceded" still reads as a goal, as does anything else naming one
        assert_eq!(
            StatCategory::classify("Goal Conceded"),
            Some(StatCategory::Goal)
        );
        // "goal" is checked before "red"
        assert_eq!(
            StatCategory::classify("Goal scored"),
            Some(StatCategory::Goal)
        );
    }

    #[test]
    fn categories_map_to_distinct_columns() {
        let mut columns: Vec<&str> = StatCategory::ALL.iter().map(|c| c.column()).collect();
        columns.sort_unstable();
        columns.dedup();
        assert_eq!(columns.len(), StatCategory::ALL.len());
    }

    #[test]
    fn event_type_line_flags_player_and_hidden() {
        let goal = EventType {
            id: 2,
            team_id: 1,
            name: "Goal".to_string(),
            icon: "G".to_string(),
            color: String::new(),
            requires_player: true,
            is_positive: true,
            is_active: false,
            sort_order: 0,
            category: Some(StatCategory::Goal),
        };
        assert_eq!(goal.to_string(), "[2] G Goal (goal) - needs player - hidden");
    }
}
