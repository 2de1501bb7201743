use std::fmt::Display;

use serde::Serialize;

use crate::team::types::Player;

/// Cumulative counters for one player in one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerStats {
    pub id: i64,
    pub player_id: i64,
    pub season_id: i64,
    pub goals: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

impl Display for PlayerStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} goals, {} assists, {} yellow, {} red",
            self.goals, self.assists, self.yellow_cards, self.red_cards
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatAction {
    Add,
    Remove,
}

impl StatAction {
    pub fn delta(self) -> i64 {
        match self {
            StatAction::Add => 1,
            StatAction::Remove => -1,
        }
    }
}

/// A player's season counters, as listed for a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub player: Player,
    pub stats: PlayerStats,
}

impl Display for StatLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.player, self.stats)
    }
}
