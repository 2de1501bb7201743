//! Match clock. Nothing ticks in storage: the displayed time is recomputed from the stored
//! period timestamps, so a restarted process shows the same value.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::fixture::types::MatchPeriod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchClock {
    /// Elapsed seconds of every completed period.
    pub completed_secs: i64,
    /// The period in play and when it started.
    pub live: Option<(u32, DateTime<Utc>)>,
}

impl MatchClock {
    pub fn from_periods(periods: &[MatchPeriod]) -> Self {
        let completed_secs = periods
            .iter()
            .filter(|period| period.is_completed)
            .map(|period| period.elapsed_secs)
            .sum();
        let live = periods
            .iter()
            .filter(|period| period.is_active)
            .max_by_key(|period| period.period_number)
            .map(|period| (period.period_number, period.started_at));

        Self {
            completed_secs,
            live,
        }
    }

    /// Completed time plus the in-progress delta of the live period.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> i64 {
        let live_secs = self
            .live
            .map(|(_, started_at)| (now - started_at).num_seconds().max(0))
            .unwrap_or(0);
        self.completed_secs + live_secs
    }

    pub fn display(&self, now: DateTime<Utc>) -> String {
        format_clock(self.elapsed_secs(now))
    }
}

/// `mm:ss`, minutes are not wrapped at 60.
pub fn format_clock(secs: i64) -> String {
    let secs = secs.max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
