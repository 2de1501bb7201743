use rusqlite::{Connection, OptionalExtension as _, Result, Row, params, types::Type};

use crate::db::DbRequest;
use crate::fixture::clock::MatchClock;
use crate::fixture::types::{Match, MatchPeriod, MatchState};

const MATCH_COLUMNS: &str = "
    id, team_id, opponent, kickoff, venue, total_periods, period_minutes, current_period,
    total_elapsed_secs, is_started, is_completed, state, state_period, team_score, opponent_score
";

const PERIOD_COLUMNS: &str =
    "id, match_id, period_number, started_at, ended_at, elapsed_secs, is_active, is_completed";

fn match_from_row(row: &Row) -> Result<Match> {
    let state_kind: String = row.get("state")?;
    let state_period: Option<u32> = row.get("state_period")?;
    let state = MatchState::from_columns(&state_kind, state_period).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            11,
            Type::Text,
            format!("invalid match state {state_kind:?} / {state_period:?}").into(),
        )
    })?;

    Ok(Match {
        id: row.get("id")?,
        team_id: row.get("team_id")?,
        opponent: row.get("opponent")?,
        kickoff: row.get("kickoff")?,
        venue: row.get("venue")?,
        total_periods: row.get("total_periods")?,
        period_minutes: row.get("period_minutes")?,
        current_period: row.get("current_period")?,
        total_elapsed_secs: row.get("total_elapsed_secs")?,
        is_started: row.get("is_started")?,
        is_completed: row.get("is_completed")?,
        state,
        team_score: row.get("team_score")?,
        opponent_score: row.get("opponent_score")?,
    })
}

fn period_from_row(row: &Row) -> Result<MatchPeriod> {
    Ok(MatchPeriod {
        id: row.get("id")?,
        match_id: row.get("match_id")?,
        period_number: row.get("period_number")?,
        started_at: row.get("started_at")?,
        ended_at: row.get("ended_at")?,
        elapsed_secs: row.get("elapsed_secs")?,
        is_active: row.get("is_active")?,
        is_completed: row.get("is_completed")?,
    })
}

pub fn get_match(conn: &Connection, id: i64) -> Result<Option<Match>> {
    conn.query_one(
        &format!("SELECT {MATCH_COLUMNS} FROM matches WHERE id=?1"),
        params![id],
        match_from_row,
    )
    .optional()
}

pub fn periods_of_match(conn: &Connection, match_id: i64) -> Result<Vec<MatchPeriod>> {
    let mut statement = conn.prepare(&format!(
        "SELECT {PERIOD_COLUMNS} FROM match_periods WHERE match_id=?1 ORDER BY period_number, id"
    ))?;

    statement
        .query_map(params![match_id], period_from_row)?
        .collect()
}

pub fn active_periods(conn: &Connection, match_id: i64) -> Result<Vec<MatchPeriod>> {
    let mut statement = conn.prepare(&format!(
        "SELECT {PERIOD_COLUMNS} FROM match_periods WHERE match_id=?1 AND is_active=1 ORDER BY id"
    ))?;

    statement
        .query_map(params![match_id], period_from_row)?
        .collect()
}

pub struct GetMatch {
    pub id: i64,
}
impl DbRequest for GetMatch {
    type ReturnValue = Result<Option<Match>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        get_match(conn, self.id)
    }
}

pub struct ListMatches {
    pub team_id: i64,
}
impl DbRequest for ListMatches {
    type ReturnValue = Result<Vec<Match>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let mut statement = conn.prepare(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches WHERE team_id=?1 ORDER BY kickoff DESC, id DESC"
        ))?;

        statement
            .query_map(params![self.team_id], match_from_row)?
            .collect()
    }
}

pub struct ListPeriods {
    pub match_id: i64,
}
impl DbRequest for ListPeriods {
    type ReturnValue = Result<Vec<MatchPeriod>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        periods_of_match(conn, self.match_id)
    }
}

/// The match together with a clock derived from its stored periods.
pub struct GetMatchClock {
    pub match_id: i64,
}
impl DbRequest for GetMatchClock {
    type ReturnValue = Result<Option<(Match, MatchClock)>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let Some(fixture) = get_match(conn, self.match_id)? else {
            return Ok(None);
        };
        let periods = periods_of_match(conn, self.match_id)?;

        Ok(Some((fixture, MatchClock::from_periods(&periods))))
    }
}
