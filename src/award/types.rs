use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::types::text_enum;
use crate::stats::types::StatLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardKind {
    TopScorer,
    MostAssists,
}

text_enum!(AwardKind, "award", {
    TopScorer => "top_scorer",
    MostAssists => "most_assists",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Award {
    pub id: i64,
    pub season_id: i64,
    pub team_id: i64,
    pub player_id: i64,
    pub kind: AwardKind,
    pub value: u32,
    pub created_at: DateTime<Utc>,
}

impl Display for Award {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}: player {} ({})",
            self.id, self.kind, self.player_id, self.value
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardPick {
    pub kind: AwardKind,
    pub player_id: i64,
    pub value: u32,
}

/// First line holding the strictly greatest positive value, so ties go to the earlier line.
fn leader(lines: &[StatLine], metric: impl Fn(&StatLine) -> u32) -> Option<(i64, u32)> {
    let mut best: Option<(i64, u32)> = None;
    for line in lines {
        let value = metric(line);
        if value > best.map_or(0, |(_, best_value)| best_value) {
            best = Some((line.player.id, value));
        }
    }
    best
}

/// Chooses the season awards from a team's stat lines.
///
/// The most-assists award is skipped when its leader is already the top scorer.
pub fn pick_awards(lines: &[StatLine]) -> Vec<AwardPick> {
    let mut picks = Vec::new();

    let top_scorer = leader(lines, |line| line.stats.goals);
    if let Some((player_id, value)) = top_scorer {
        picks.push(AwardPick {
            kind: AwardKind::TopScorer,
            player_id,
            value,
        });
    }

    if let Some((player_id, value)) = leader(lines, |line| line.stats.assists)
        && top_scorer.is_none_or(|(scorer_id, _)| scorer_id != player_id)
    {
        picks.push(AwardPick {
            kind: AwardKind::MostAssists,
            player_id,
            value,
        });
    }

    picks
}
