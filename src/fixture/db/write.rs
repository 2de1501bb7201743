use anyhow::{Context as _, anyhow, bail};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};
use tracing::{info, warn};

use crate::db::DbRequest;
use crate::error::UserError;
use crate::fixture::db::read::{active_periods, get_match};
use crate::fixture::types::{Match, MatchPeriod, MatchState, NextAction, Venue};
use crate::team::db::read::get_team;

/// Closes a period at `at`, measuring its length from the stored start timestamp.
fn close_period(
    conn: &Connection,
    period: &MatchPeriod,
    at: DateTime<Utc>,
) -> Result<MatchPeriod, rusqlite::Error> {
    let elapsed_secs = (at - period.started_at).num_seconds().max(0);

    conn.execute(
        "
        UPDATE match_periods
        SET ended_at=?2, elapsed_secs=?3, is_active=0, is_completed=1
        WHERE id=?1
        ",
        params![period.id, at, elapsed_secs],
    )?;

    Ok(MatchPeriod {
        ended_at: Some(at),
        elapsed_secs,
        is_active: false,
        is_completed: true,
        ..period.clone()
    })
}

/// Persists a new match state. The elapsed total is recomputed from the completed periods,
/// and a match only counts as started once it has a period row.
fn save_progress(
    conn: &Connection,
    match_id: i64,
    state: MatchState,
    current_period: u32,
) -> Result<(), rusqlite::Error> {
    let (state_kind, state_period) = state.to_columns();

    conn.execute(
        "
        UPDATE matches SET
            state=?2,
            state_period=?3,
            current_period=?4,
            is_started=(is_started OR EXISTS(SELECT 1 FROM match_periods WHERE match_id=?1)),
            is_completed=?5,
            total_elapsed_secs=(
                SELECT COALESCE(SUM(elapsed_secs), 0)
                FROM match_periods
                WHERE match_id=?1 AND is_completed=1
            )
        WHERE id=?1
        ",
        params![
            match_id,
            state_kind,
            state_period,
            current_period,
            state == MatchState::Completed
        ],
    )?;
    Ok(())
}

/// Deletes a match with its periods and events. Each event's statistic contribution is
/// reversed before the event row goes.
pub fn delete_match_cascade(conn: &Connection, match_id: i64) -> anyhow::Result<()> {
    let events = crate::event::db::read::events_of_match(conn, match_id)?;
    for event in &events {
        crate::event::db::write::reverse_contribution(conn, event)
            .with_context(|| format!("Failed to reverse statistics of event {}", event.id))?;
    }

    conn.execute(
        "DELETE FROM match_events WHERE match_id=?1",
        params![match_id],
    )?;
    conn.execute(
        "DELETE FROM match_periods WHERE match_id=?1",
        params![match_id],
    )?;
    conn.execute("DELETE FROM matches WHERE id=?1", params![match_id])?;

    Ok(())
}

pub struct CreateMatch {
    pub team_id: i64,
    pub opponent: String,
    pub kickoff: DateTime<Utc>,
    pub venue: Venue,
    pub total_periods: u32,
    pub period_minutes: u32,
}
impl DbRequest for CreateMatch {
    type ReturnValue = anyhow::Result<Match>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let opponent = self.opponent.trim().to_string();
        if opponent.is_empty() {
            bail!(UserError(anyhow!("Opponent cannot be empty")));
        }
        if self.total_periods == 0 {
            bail!(UserError(anyhow!("A match needs at least one period")));
        }
        if self.period_minutes == 0 {
            bail!(UserError(anyhow!("Periods must last at least one minute")));
        }
        if get_team(conn, self.team_id)?.is_none() {
            bail!(UserError(anyhow!("Team {} does not exist", self.team_id)));
        }

        let (state_kind, state_period) = MatchState::NotStarted.to_columns();
        conn.execute(
            "
            INSERT INTO matches (
                team_id, opponent, kickoff, venue, total_periods, period_minutes, state, state_period
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ",
            params![
                self.team_id,
                opponent,
                self.kickoff,
                self.venue,
                self.total_periods,
                self.period_minutes,
                state_kind,
                state_period
            ],
        )?;

        let fixture = Match {
            id: conn.last_insert_rowid(),
            team_id: self.team_id,
            opponent,
            kickoff: self.kickoff,
            venue: self.venue,
            total_periods: self.total_periods,
            period_minutes: self.period_minutes,
            current_period: 0,
            total_elapsed_secs: 0,
            is_started: false,
            is_completed: false,
            state: MatchState::NotStarted,
            team_score: None,
            opponent_score: None,
        };
        info!("Created match {fixture}");
        Ok(fixture)
    }
}

/// Starts a period. Any period still marked active for the match is ended first, so at most
/// one period is ever in play.
///
/// Allowed when the match's next action is to start this period, or when the previous period
/// is still in play (it is ended at the same instant). An unknown match is a no-op.
pub struct StartPeriod {
    pub match_id: i64,
    pub period_number: u32,
    pub at: DateTime<Utc>,
}
impl DbRequest for StartPeriod {
    type ReturnValue = anyhow::Result<Option<MatchPeriod>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let transaction = conn.transaction()?;

        let Some(fixture) = get_match(&transaction, self.match_id)? else {
            warn!("Attempted to start a period of unknown match {}", self.match_id);
            return Ok(None);
        };

        let number = self.period_number;
        let allowed = match fixture.state {
            MatchState::PeriodActive(active) => {
                number == active + 1 && number <= fixture.total_periods
            }
            state => state.next_action(fixture.total_periods) == NextAction::StartPeriod(number),
        };
        if !allowed {
            bail!(UserError(anyhow!(
                "Cannot start period {number} of match {}: next action is {}",
                fixture.id,
                fixture.next_action()
            )));
        }

        for period in active_periods(&transaction, fixture.id)? {
            let closed = close_period(&transaction, &period, self.at)?;
            info!(
                "Ended period {} of match {} after {}s before starting period {number}",
                closed.period_number, fixture.id, closed.elapsed_secs
            );
        }

        transaction.execute(
            "
            INSERT INTO match_periods (match_id, period_number, started_at, is_active, is_completed)
            VALUES (?1, ?2, ?3, 1, 0)
            ",
            params![fixture.id, number, self.at],
        )?;
        let period = MatchPeriod {
            id: transaction.last_insert_rowid(),
            match_id: fixture.id,
            period_number: number,
            started_at: self.at,
            ended_at: None,
            elapsed_secs: 0,
            is_active: true,
            is_completed: false,
        };

        save_progress(
            &transaction,
            fixture.id,
            MatchState::PeriodActive(number),
            number,
        )?;

        transaction.commit()?;
        info!("Started period {number} of match {}", fixture.id);
        Ok(Some(period))
    }
}

/// Ends the active period with the given number. Ending the last configured period completes
/// the match. A missing match or period is a no-op.
pub struct EndPeriod {
    pub match_id: i64,
    pub period_number: u32,
    pub at: DateTime<Utc>,
}
impl DbRequest for EndPeriod {
    type ReturnValue = anyhow::Result<Option<MatchPeriod>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let transaction = conn.transaction()?;

        let Some(fixture) = get_match(&transaction, self.match_id)? else {
            warn!("Attempted to end a period of unknown match {}", self.match_id);
            return Ok(None);
        };

        let active = active_periods(&transaction, fixture.id)?
            .into_iter()
            .find(|period| period.period_number == self.period_number);
        let Some(period) = active else {
            warn!(
                "Match {} has no active period {}",
                fixture.id, self.period_number
            );
            return Ok(None);
        };

        let closed = close_period(&transaction, &period, self.at)?;

        let state = if closed.period_number >= fixture.total_periods {
            MatchState::Completed
        } else {
            MatchState::PeriodEnded(closed.period_number)
        };
        save_progress(&transaction, fixture.id, state, closed.period_number)?;

        transaction.commit()?;
        info!(
            "Ended period {} of match {} after {}s, match is now {state}",
            closed.period_number, fixture.id, closed.elapsed_secs
        );
        Ok(Some(closed))
    }
}

/// Records the final score and completes the match, ending a period still in play.
pub struct SetFinalScore {
    pub match_id: i64,
    pub team_score: u32,
    pub opponent_score: u32,
    pub at: DateTime<Utc>,
}
impl DbRequest for SetFinalScore {
    type ReturnValue = anyhow::Result<Option<Match>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let transaction = conn.transaction()?;

        let Some(fixture) = get_match(&transaction, self.match_id)? else {
            warn!("Attempted to score unknown match {}", self.match_id);
            return Ok(None);
        };

        for period in active_periods(&transaction, fixture.id)? {
            close_period(&transaction, &period, self.at)?;
        }

        save_progress(
            &transaction,
            fixture.id,
            MatchState::Completed,
            fixture.current_period,
        )?;
        transaction.execute(
            "UPDATE matches SET team_score=?2, opponent_score=?3 WHERE id=?1",
            params![fixture.id, self.team_score, self.opponent_score],
        )?;

        let updated = get_match(&transaction, fixture.id)?;
        transaction.commit()?;

        info!(
            "Final score of match {}: {}-{}",
            fixture.id, self.team_score, self.opponent_score
        );
        Ok(updated)
    }
}

pub struct DeleteMatch {
    pub match_id: i64,
}
impl DbRequest for DeleteMatch {
    type ReturnValue = anyhow::Result<bool>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let transaction = conn.transaction()?;

        if get_match(&transaction, self.match_id)?.is_none() {
            warn!("Attempted to delete unknown match {}", self.match_id);
            return Ok(false);
        }

        delete_match_cascade(&transaction, self.match_id)?;
        transaction.commit()?;

        info!("Deleted match {} with its periods and events", self.match_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone as _};

    use super::*;
    use crate::db::test_connection;
    use crate::error::is_user_error;
    use crate::fixture::db::read::{GetMatch, GetMatchClock, ListPeriods};
    use crate::team::db::write::CreateTeam;

    fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 10, 0, 0).unwrap()
    }

    fn at(secs: i64) -> DateTime<Utc> {
        kickoff() + Duration::seconds(secs)
    }

    fn new_match(conn: &mut Connection, total_periods: u32) -> Match {
        let team = CreateTeam {
            name: "Riverside U10".to_string(),
            age_group: None,
            at: kickoff(),
        }
        .execute(conn)
        .unwrap();

        CreateMatch {
            team_id: team.id,
            opponent: "Hillside".to_string(),
            kickoff: kickoff(),
            venue: Venue::Home,
            total_periods,
            period_minutes: 25,
        }
        .execute(conn)
        .unwrap()
    }

    fn start(conn: &mut Connection, match_id: i64, n: u32, secs: i64) -> MatchPeriod {
        StartPeriod {
            match_id,
            period_number: n,
            at: at(secs),
        }
        .execute(conn)
        .unwrap()
        .unwrap()
    }

    fn end(conn: &mut Connection, match_id: i64, n: u32, secs: i64) -> MatchPeriod {
        EndPeriod {
            match_id,
            period_number: n,
            at: at(secs),
        }
        .execute(conn)
        .unwrap()
        .unwrap()
    }

    fn reload(conn: &mut Connection, id: i64) -> Match {
        GetMatch { id }.execute(conn).unwrap().unwrap()
    }

    fn active_count(conn: &mut Connection, match_id: i64) -> usize {
        ListPeriods { match_id }
            .execute(conn)
            .unwrap()
            .iter()
            .filter(|period| period.is_active)
            .count()
    }

    #[test]
    fn match_walks_through_its_periods() {
        let mut conn = test_connection();
        let fixture = new_match(&mut conn, 2);
        assert_eq!(fixture.next_action(), NextAction::StartPeriod(1));

        start(&mut conn, fixture.id, 1, 0);
        assert_eq!(reload(&mut conn, fixture.id).next_action(), NextAction::EndPeriod(1));

        end(&mut conn, fixture.id, 1, 1500);
        let reloaded = reload(&mut conn, fixture.id);
        assert_eq!(reloaded.state, MatchState::PeriodEnded(1));
        // regression: ending a non-final period must never offer a fresh kickoff
        assert_eq!(reloaded.next_action(), NextAction::StartPeriod(2));
        assert!(!reloaded.is_completed);

        start(&mut conn, fixture.id, 2, 1800);
        end(&mut conn, fixture.id, 2, 3300);
        let reloaded = reload(&mut conn, fixture.id);
        assert_eq!(reloaded.state, MatchState::Completed);
        assert_eq!(reloaded.next_action(), NextAction::MatchComplete);
        assert!(reloaded.is_started && reloaded.is_completed);
        assert_eq!(reloaded.current_period, 2);
    }

    #[test]
    fn total_elapsed_is_the_sum_of_completed_periods() {
        let mut conn = test_connection();
        let fixture = new_match(&mut conn, 2);

        start(&mut conn, fixture.id, 1, 0);
        let first = end(&mut conn, fixture.id, 1, 1512);
        start(&mut conn, fixture.id, 2, 2400);
        let second = end(&mut conn, fixture.id, 2, 3907);

        assert_eq!(first.elapsed_secs, 1512);
        assert_eq!(second.elapsed_secs, 1507);

        let reloaded = reload(&mut conn, fixture.id);
        assert_eq!(reloaded.total_elapsed_secs, 1512 + 1507);

        let (_, clock) = GetMatchClock { match_id: fixture.id }
            .execute(&mut conn)
            .unwrap()
            .unwrap();
        assert_eq!(clock.elapsed_secs(at(99_999)), 1512 + 1507);
    }

    #[test]
    fn clock_keeps_counting_into_second_period() {
        let mut conn = test_connection();
        let fixture = new_match(&mut conn, 2);

        start(&mut conn, fixture.id, 1, 0);
        end(&mut conn, fixture.id, 1, 1500);
        start(&mut conn, fixture.id, 2, 1800);

        let (_, clock) = GetMatchClock { match_id: fixture.id }
            .execute(&mut conn)
            .unwrap()
            .unwrap();
        assert_eq!(clock.elapsed_secs(at(1800 + 90)), 1590);
    }

    #[test]
    fn at_most_one_period_is_active() {
        let mut conn = test_connection();
        let fixture = new_match(&mut conn, 4);

        start(&mut conn, fixture.id, 1, 0);
        assert_eq!(active_count(&mut conn, fixture.id), 1);

        // starting the next period while one is in play ends the running one
        start(&mut conn, fixture.id, 2, 600);
        assert_eq!(active_count(&mut conn, fixture.id), 1);

        let periods = ListPeriods { match_id: fixture.id }.execute(&mut conn).unwrap();
        assert!(periods[0].is_completed);
        assert_eq!(periods[0].elapsed_secs, 600);
        assert_eq!(periods[0].ended_at, Some(at(600)));

        end(&mut conn, fixture.id, 2, 1200);
        assert_eq!(active_count(&mut conn, fixture.id), 0);
        start(&mut conn, fixture.id, 3, 1500);
        assert_eq!(active_count(&mut conn, fixture.id), 1);
    }

    #[test]
    fn out_of_order_start_is_rejected() {
        let mut conn = test_connection();
        let fixture = new_match(&mut conn, 2);

        let err = StartPeriod {
            match_id: fixture.id,
            period_number: 2,
            at: at(0),
        }
        .execute(&mut conn)
        .unwrap_err();
        assert!(is_user_error(&err));

        start(&mut conn, fixture.id, 1, 0);
        end(&mut conn, fixture.id, 1, 100);
        start(&mut conn, fixture.id, 2, 200);
        end(&mut conn, fixture.id, 2, 300);

        let err = StartPeriod {
            match_id: fixture.id,
            period_number: 3,
            at: at(400),
        }
        .execute(&mut conn)
        .unwrap_err();
        assert!(is_user_error(&err));
        assert_eq!(active_count(&mut conn, fixture.id), 0);
    }

    #[test]
    fn missing_match_or_period_is_a_no_op() {
        let mut conn = test_connection();
        let fixture = new_match(&mut conn, 2);

        let started = StartPeriod {
            match_id: 404,
            period_number: 1,
            at: at(0),
        }
        .execute(&mut conn)
        .unwrap();
        assert_eq!(started, None);

        let ended = EndPeriod {
            match_id: fixture.id,
            period_number: 1,
            at: at(0),
        }
        .execute(&mut conn)
        .unwrap();
        assert_eq!(ended, None);
        assert_eq!(reload(&mut conn, fixture.id).state, MatchState::NotStarted);
    }

    #[test]
    fn final_score_closes_live_period() {
        let mut conn = test_connection();
        let fixture = new_match(&mut conn, 2);
        start(&mut conn, fixture.id, 1, 0);

        let scored = SetFinalScore {
            match_id: fixture.id,
            team_score: 3,
            opponent_score: 1,
            at: at(900),
        }
        .execute(&mut conn)
        .unwrap()
        .unwrap();

        assert_eq!(scored.state, MatchState::Completed);
        assert_eq!(scored.team_score, Some(3));
        assert_eq!(scored.opponent_score, Some(1));
        assert_eq!(scored.total_elapsed_secs, 900);
        assert_eq!(active_count(&mut conn, fixture.id), 0);
    }

    #[test]
    fn scoring_an_unplayed_match_does_not_start_it() {
        let mut conn = test_connection();
        let fixture = new_match(&mut conn, 2);

        let scored = SetFinalScore {
            match_id: fixture.id,
            team_score: 0,
            opponent_score: 0,
            at: at(0),
        }
        .execute(&mut conn)
        .unwrap()
        .unwrap();

        assert_eq!(scored.state, MatchState::Completed);
        assert!(scored.is_completed);
        assert!(!scored.is_started);
        assert_eq!(scored.current_period, 0);
        assert_eq!(scored.total_elapsed_secs, 0);
        assert!(!reload(&mut conn, fixture.id).is_started);
    }

    #[test]
    fn invalid_match_setup_is_rejected() {
        let mut conn = test_connection();
        let err = CreateMatch {
            team_id: 1,
            opponent: "Hillside".to_string(),
            kickoff: kickoff(),
            venue: Venue::Away,
            total_periods: 2,
            period_minutes: 20,
        }
        .execute(&mut conn)
        .unwrap_err();
        assert!(is_user_error(&err));

        let fixture = new_match(&mut conn, 2);
        let err = CreateMatch {
            team_id: fixture.team_id,
            opponent: "Hillside".to_string(),
            kickoff: kickoff(),
            venue: Venue::Away,
            total_periods: 0,
            period_minutes: 20,
        }
        .execute(&mut conn)
        .unwrap_err();
        assert!(is_user_error(&err));
    }

    #[test]
    fn deleting_a_match_removes_its_periods() {
        let mut conn = test_connection();
        let fixture = new_match(&mut conn, 2);
        start(&mut conn, fixture.id, 1, 0);

        assert!(DeleteMatch { match_id: fixture.id }.execute(&mut conn).unwrap());
        assert_eq!(GetMatch { id: fixture.id }.execute(&mut conn).unwrap(), None);
        assert!(ListPeriods { match_id: fixture.id }
            .execute(&mut conn)
            .unwrap()
            .is_empty());
        assert!(!DeleteMatch { match_id: fixture.id }.execute(&mut conn).unwrap());
    }
}
