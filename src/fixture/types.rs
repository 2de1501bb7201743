use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::types::text_enum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Venue {
    Home,
    Away,
}

text_enum!(Venue, "venue", { Home => "home", Away => "away" });

/// Where a match stands. Persisted on the match row, so the next action never has to be
/// inferred from period ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "period", rename_all = "snake_case")]
pub enum MatchState {
    NotStarted,
    PeriodActive(u32),
    PeriodEnded(u32),
    Completed,
}

impl MatchState {
    pub fn next_action(self, total_periods: u32) -> NextAction {
        match self {
            MatchState::NotStarted => NextAction::StartPeriod(1),
            MatchState::PeriodActive(n) => NextAction::EndPeriod(n),
            MatchState::PeriodEnded(n) if n < total_periods => NextAction::StartPeriod(n + 1),
            MatchState::PeriodEnded(_) | MatchState::Completed => NextAction::MatchComplete,
        }
    }

    pub fn active_period(self) -> Option<u32> {
        match self {
            MatchState::PeriodActive(n) => Some(n),
            _ => None,
        }
    }

    pub(crate) fn to_columns(self) -> (&'static str, Option<u32>) {
        match self {
            MatchState::NotStarted => ("not_started", None),
            MatchState::PeriodActive(n) => ("period_active", Some(n)),
            MatchState::PeriodEnded(n) => ("period_ended", Some(n)),
            MatchState::Completed => ("completed", None),
        }
    }

    pub(crate) fn from_columns(kind: &str, period: Option<u32>) -> Option<Self> {
        match (kind, period) {
            ("not_started", _) => Some(MatchState::NotStarted),
            ("period_active", Some(n)) => Some(MatchState::PeriodActive(n)),
            ("period_ended", Some(n)) => Some(MatchState::PeriodEnded(n)),
            ("completed", _) => Some(MatchState::Completed),
            _ => None,
        }
    }
}

impl Display for MatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchState::NotStarted => f.write_str("not started"),
            MatchState::PeriodActive(n) => write!(f, "period {n} in play"),
            MatchState::PeriodEnded(n) => write!(f, "period {n} ended"),
            MatchState::Completed => f.write_str("completed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "period", rename_all = "snake_case")]
pub enum NextAction {
    StartPeriod(u32),
    EndPeriod(u32),
    MatchComplete,
}

impl Display for NextAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NextAction::StartPeriod(n) => write!(f, "start period {n}"),
            NextAction::EndPeriod(n) => write!(f, "end period {n}"),
            NextAction::MatchComplete => f.write_str("none, match complete"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: i64,
    pub team_id: i64,
    pub opponent: String,
    pub kickoff: DateTime<Utc>,
    pub venue: Venue,
    pub total_periods: u32,
    pub period_minutes: u32,
    pub current_period: u32,
    /// Sum of the elapsed time of every completed period, in seconds.
    pub total_elapsed_secs: i64,
    pub is_started: bool,
    pub is_completed: bool,
    pub state: MatchState,
    pub team_score: Option<u32>,
    pub opponent_score: Option<u32>,
}

impl Match {
    pub fn next_action(&self) -> NextAction {
        self.state.next_action(self.total_periods)
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let venue = match self.venue {
            Venue::Home => "vs",
            Venue::Away => "@",
        };
        write!(
            f,
            "[{}] {venue} {} on {} ({})",
            self.id,
            self.opponent,
            self.kickoff.format("%Y-%m-%d %H:%M"),
            self.state
        )?;
        if let (Some(team), Some(opponent)) = (self.team_score, self.opponent_score) {
            write!(f, " {team}-{opponent}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchPeriod {
    pub id: i64,
    pub match_id: i64,
    pub period_number: u32,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    /// Measured length in seconds, zero until the period ends.
    pub elapsed_secs: i64,
    pub is_active: bool,
    pub is_completed: bool,
}

impl Display for MatchPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Period {} started {}",
            self.period_number,
            self.started_at.format("%H:%M:%S")
        )?;
        match self.ended_at {
            Some(ended_at) => write!(
                f,
                ", ended {} ({})",
                ended_at.format("%H:%M:%S"),
                crate::fixture::clock::format_clock(self.elapsed_secs)
            ),
            None => f.write_str(", in play"),
        }
    }
}
