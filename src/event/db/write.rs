use anyhow::{anyhow, bail};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};
use tracing::{info, warn};

use crate::db::DbRequest;
use crate::error::UserError;
use crate::event::db::read::{get_event, get_event_type};
use crate::event::types::{
    DEFAULT_EVENT_TYPES, EventType, MatchEvent, StatCategory, SyncStatus,
};
use crate::fixture::db::read::get_match;
use crate::season::db::read::current_season;
use crate::stats::db::write::apply_event;
use crate::stats::types::StatAction;
use crate::team::db::read::{get_player, get_team};

/// How a new event type gets its statistic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySource {
    /// Classify by name (see `StatCategory::classify`).
    FromName,
    Explicit(Option<StatCategory>),
}

fn insert_event_type(conn: &Connection, event_type: EventType) -> Result<EventType, rusqlite::Error> {
    conn.execute(
        "
        INSERT INTO event_types (
            team_id, name, icon, color, requires_player, is_positive, is_active, sort_order, category
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        ",
        params![
            event_type.team_id,
            event_type.name,
            event_type.icon,
            event_type.color,
            event_type.requires_player,
            event_type.is_positive,
            event_type.is_active,
            event_type.sort_order,
            event_type.category
        ],
    )?;

    Ok(EventType {
        id: conn.last_insert_rowid(),
        ..event_type
    })
}

fn next_sort_order(conn: &Connection, team_id: i64) -> Result<i64, rusqlite::Error> {
    conn.query_one(
        "SELECT COALESCE(MAX(sort_order) + 1, 0) FROM event_types WHERE team_id=?1",
        params![team_id],
        |row| row.get(0),
    )
}

/// Takes back the statistic an event contributed, if it contributed one.
pub fn reverse_contribution(conn: &Connection, event: &MatchEvent) -> Result<(), rusqlite::Error> {
    if let (Some(player_id), Some(category), Some(season_id)) =
        (event.player_id, event.category, event.season_id)
    {
        apply_event(conn, player_id, season_id, category, StatAction::Remove)?;
    }
    Ok(())
}

/// Fills in the category of event types stored without one, by name. Returns how many were
/// classified.
pub fn backfill_categories(conn: &Connection) -> Result<usize, rusqlite::Error> {
    let unclassified: Vec<(i64, String)> = conn
        .prepare("SELECT id, name FROM event_types WHERE category IS NULL")?
        .query_map([], |row| Ok((row.get("id")?, row.get("name")?)))?
        .collect::<Result<_, _>>()?;

    let mut statement = conn.prepare("UPDATE event_types SET category=?2 WHERE id=?1")?;
    let mut classified = 0;
    for (id, name) in unclassified {
        if let Some(category) = StatCategory::classify(&name) {
            statement.execute(params![id, category])?;
            classified += 1;
        }
    }

    Ok(classified)
}

pub struct CreateEventType {
    pub team_id: i64,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub requires_player: bool,
    pub is_positive: bool,
    /// Appended after the existing buttons when `None`.
    pub sort_order: Option<i64>,
    pub category: CategorySource,
}
impl DbRequest for CreateEventType {
    type ReturnValue = anyhow::Result<EventType>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            bail!(UserError(anyhow!("Event type name cannot be empty")));
        }

        let transaction = conn.transaction()?;

        if get_team(&transaction, self.team_id)?.is_none() {
            bail!(UserError(anyhow!("Team {} does not exist", self.team_id)));
        }

        let category = match self.category {
            CategorySource::FromName => StatCategory::classify(&name),
            CategorySource::Explicit(category) => category,
        };
        let sort_order = match self.sort_order {
            Some(sort_order) => sort_order,
            None => next_sort_order(&transaction, self.team_id)?,
        };

        let event_type = insert_event_type(
            &transaction,
            EventType {
                id: 0,
                team_id: self.team_id,
                name,
                icon: self.icon,
                color: self.color,
                requires_player: self.requires_player,
                is_positive: self.is_positive,
                is_active: true,
                sort_order,
                category,
            },
        )?;

        transaction.commit()?;
        info!("Created event type {event_type} for team {}", self.team_id);
        Ok(event_type)
    }
}

/// Installs the default catalogue for a team that has no event types yet. Returns the created
/// event types, empty when the team already had a catalogue.
pub struct SeedDefaultEventTypes {
    pub team_id: i64,
}
impl DbRequest for SeedDefaultEventTypes {
    type ReturnValue = anyhow::Result<Vec<EventType>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let transaction = conn.transaction()?;

        if get_team(&transaction, self.team_id)?.is_none() {
            bail!(UserError(anyhow!("Team {} does not exist", self.team_id)));
        }

        let existing: i64 = transaction.query_one(
            "SELECT COUNT(*) FROM event_types WHERE team_id=?1",
            params![self.team_id],
            |row| row.get(0),
        )?;
        if existing > 0 {
            info!(
                "Team {} already has {existing} event type(s), not seeding defaults",
                self.team_id
            );
            return Ok(Vec::new());
        }

        let created = DEFAULT_EVENT_TYPES
            .iter()
            .zip(0..)
            .map(|(template, sort_order)| {
                insert_event_type(
                    &transaction,
                    EventType {
                        id: 0,
                        team_id: self.team_id,
                        name: template.name.to_string(),
                        icon: template.icon.to_string(),
                        color: template.color.to_string(),
                        requires_player: template.requires_player,
                        is_positive: template.is_positive,
                        is_active: true,
                        sort_order,
                        category: template.category,
                    },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        transaction.commit()?;
        info!(
            "Seeded {} default event types for team {}",
            created.len(),
            self.team_id
        );
        Ok(created)
    }
}

pub struct SetEventTypeActive {
    pub id: i64,
    pub is_active: bool,
}
impl DbRequest for SetEventTypeActive {
    type ReturnValue = anyhow::Result<bool>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let updated = conn.execute(
            "UPDATE event_types SET is_active=?2 WHERE id=?1",
            params![self.id, self.is_active],
        )?;

        if updated == 0 {
            warn!("Attempted to toggle unknown event type {}", self.id);
            return Ok(false);
        }
        info!("Event type {} active: {}", self.id, self.is_active);
        Ok(true)
    }
}

/// Appends an event to a match.
///
/// The period must be the one in play. Player-bound statistics go to the current season; with
/// no current season the event is still stored but counts towards nothing. An unknown match is
/// a no-op.
pub struct RecordEvent {
    pub match_id: i64,
    pub event_type_id: i64,
    pub player_id: Option<i64>,
    pub period_number: u32,
    pub elapsed_secs: i64,
    pub at: DateTime<Utc>,
}
impl DbRequest for RecordEvent {
    type ReturnValue = anyhow::Result<Option<MatchEvent>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let transaction = conn.transaction()?;

        let Some(fixture) = get_match(&transaction, self.match_id)? else {
            warn!("Attempted to record an event for unknown match {}", self.match_id);
            return Ok(None);
        };

        match fixture.state.active_period() {
            Some(active) if active == self.period_number => {}
            Some(active) => bail!(UserError(anyhow!(
                "Period {} is not in play, period {active} is",
                self.period_number
            ))),
            None => bail!(UserError(anyhow!(
                "No period of match {} is in play ({}), start one before recording events",
                fixture.id,
                fixture.state
            ))),
        }
        if self.elapsed_secs < 0 {
            bail!(UserError(anyhow!("Elapsed time cannot be negative")));
        }

        let event_type = get_event_type(&transaction, self.event_type_id)?
            .filter(|event_type| event_type.team_id == fixture.team_id)
            .ok_or_else(|| {
                UserError(anyhow!(
                    "Event type {} is not part of this team's catalogue",
                    self.event_type_id
                ))
            })?;
        if !event_type.is_active {
            bail!(UserError(anyhow!(
                "Event type '{}' is switched off",
                event_type.name
            )));
        }

        match (event_type.requires_player, self.player_id) {
            (true, None) => bail!(UserError(anyhow!(
                "'{}' must be recorded against a player",
                event_type.name
            ))),
            (_, Some(player_id)) => {
                let on_team = get_player(&transaction, player_id)?
                    .is_some_and(|player| player.team_id == fixture.team_id);
                if !on_team {
                    bail!(UserError(anyhow!(
                        "Player {player_id} is not in this match's team"
                    )));
                }
            }
            (false, None) => {}
        }

        let season_id = current_season(&transaction)?.map(|season| season.id);

        transaction.execute(
            "
            INSERT INTO match_events (
                match_id, event_type_id, player_id, period_number, elapsed_secs, recorded_at,
                sync_status, category, season_id
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ",
            params![
                fixture.id,
                event_type.id,
                self.player_id,
                self.period_number,
                self.elapsed_secs,
                self.at,
                SyncStatus::Pending,
                event_type.category,
                season_id
            ],
        )?;
        let event = MatchEvent {
            id: transaction.last_insert_rowid(),
            match_id: fixture.id,
            event_type_id: event_type.id,
            player_id: self.player_id,
            period_number: self.period_number,
            elapsed_secs: self.elapsed_secs,
            recorded_at: self.at,
            sync_status: SyncStatus::Pending,
            category: event_type.category,
            season_id,
        };

        if let (Some(player_id), Some(category)) = (event.player_id, event.category) {
            match season_id {
                Some(season_id) => {
                    apply_event(&transaction, player_id, season_id, category, StatAction::Add)?
                }
                None => warn!(
                    "No current season, {category} by player {player_id} is not counted"
                ),
            }
        }

        transaction.commit()?;
        info!(
            "Recorded '{}' in match {} ({event})",
            event_type.name, fixture.id
        );
        Ok(Some(event))
    }
}

/// Deletes an event after reversing its statistic. An unknown event is a no-op.
pub struct DeleteEvent {
    pub event_id: i64,
}
impl DbRequest for DeleteEvent {
    type ReturnValue = anyhow::Result<bool>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let transaction = conn.transaction()?;

        let Some(event) = get_event(&transaction, self.event_id)? else {
            warn!("Attempted to delete unknown event {}", self.event_id);
            return Ok(false);
        };

        reverse_contribution(&transaction, &event)?;
        transaction.execute(
            "DELETE FROM match_events WHERE id=?1",
            params![event.id],
        )?;

        transaction.commit()?;
        info!("Deleted event {event}");
        Ok(true)
    }
}

pub struct SetEventSyncStatus {
    pub event_id: i64,
    pub status: SyncStatus,
}
impl DbRequest for SetEventSyncStatus {
    type ReturnValue = anyhow::Result<bool>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let updated = conn.execute(
            "UPDATE match_events SET sync_status=?2 WHERE id=?1",
            params![self.event_id, self.status],
        )?;

        if updated == 0 {
            warn!("Attempted to mark unknown event {} as {}", self.event_id, self.status);
            return Ok(false);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, TimeZone as _};

    use super::*;
    use crate::db::test_connection;
    use crate::error::is_user_error;
    use crate::event::db::read::{ListEventTypes, ListMatchEvents};
    use crate::fixture::db::read::ListPeriods;
    use crate::fixture::db::write::{CreateMatch, DeleteMatch, EndPeriod, StartPeriod};
    use crate::fixture::types::{Match, Venue};
    use crate::season::db::write::CreateSeason;
    use crate::season::types::Season;
    use crate::stats::db::read::GetPlayerStats;
    use crate::stats::types::PlayerStats;
    use crate::team::db::write::{AddPlayer, CreateTeam};
    use crate::team::types::{Player, Team};

    struct Pitch {
        conn: Connection,
        team: Team,
        player: Player,
        season: Season,
        fixture: Match,
        goal: EventType,
    }

    fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 10, 0, 0).unwrap()
    }

    fn at(secs: i64) -> DateTime<Utc> {
        kickoff() + Duration::seconds(secs)
    }

    fn event_type(team_id: i64, name: &str, requires_player: bool) -> CreateEventType {
        CreateEventType {
            team_id,
            name: name.to_string(),
            icon: String::new(),
            color: String::new(),
            requires_player,
            is_positive: true,
            sort_order: None,
            category: CategorySource::FromName,
        }
    }

    fn pitch() -> Pitch {
        let mut conn = test_connection();
        let season = CreateSeason {
            name: "2025/26".to_string(),
            starts_on: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            ends_on: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            make_current: true,
        }
        .execute(&mut conn)
        .unwrap();
        let team = CreateTeam {
            name: "Riverside U10".to_string(),
            age_group: None,
            at: kickoff(),
        }
        .execute(&mut conn)
        .unwrap();
        let player = AddPlayer {
            team_id: team.id,
            name: "Sam".to_string(),
            shirt_number: 10,
            position: None,
        }
        .execute(&mut conn)
        .unwrap();
        let goal = event_type(team.id, "Goal", true)
            .execute(&mut conn)
            .unwrap();
        let fixture = CreateMatch {
            team_id: team.id,
            opponent: "Hillside".to_string(),
            kickoff: kickoff(),
            venue: Venue::Home,
            total_periods: 2,
            period_minutes: 25,
        }
        .execute(&mut conn)
        .unwrap();

        Pitch {
            conn,
            team,
            player,
            season,
            fixture,
            goal,
        }
    }

    impl Pitch {
        fn start(&mut self, n: u32, secs: i64) {
            StartPeriod {
                match_id: self.fixture.id,
                period_number: n,
                at: at(secs),
            }
            .execute(&mut self.conn)
            .unwrap()
            .unwrap();
        }

        fn end(&mut self, n: u32, secs: i64) {
            EndPeriod {
                match_id: self.fixture.id,
                period_number: n,
                at: at(secs),
            }
            .execute(&mut self.conn)
            .unwrap()
            .unwrap();
        }

        fn record(
            &mut self,
            event_type_id: i64,
            player_id: Option<i64>,
            period_number: u32,
            elapsed_secs: i64,
        ) -> anyhow::Result<Option<MatchEvent>> {
            RecordEvent {
                match_id: self.fixture.id,
                event_type_id,
                player_id,
                period_number,
                elapsed_secs,
                at: at(elapsed_secs),
            }
            .execute(&mut self.conn)
        }

        fn stats(&mut self) -> Option<PlayerStats> {
            GetPlayerStats {
                player_id: self.player.id,
                season_id: self.season.id,
            }
            .execute(&mut self.conn)
            .unwrap()
        }
    }

    #[test]
    fn goal_scenario_from_kickoff_to_half_time() {
        let mut pitch = pitch();
        assert!(pitch.goal.requires_player);
        assert_eq!(pitch.goal.category, Some(StatCategory::Goal));

        pitch.start(1, 0);
        let event = pitch
            .record(pitch.goal.id, Some(pitch.player.id), 1, 600)
            .unwrap()
            .unwrap();
        pitch.end(1, 600);

        let events = ListMatchEvents {
            match_id: pitch.fixture.id,
        }
        .execute(&mut pitch.conn)
        .unwrap();
        assert_eq!(events, vec![event.clone()]);
        assert_eq!(event.sync_status, SyncStatus::Pending);
        assert_eq!(event.elapsed_secs, 600);
        assert_eq!(event.period_number, 1);

        assert_eq!(pitch.stats().unwrap().goals, 1);

        let periods = ListPeriods {
            match_id: pitch.fixture.id,
        }
        .execute(&mut pitch.conn)
        .unwrap();
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].elapsed_secs, 600);
    }

    #[test]
    fn deleting_a_goal_restores_the_previous_count() {
        let mut pitch = pitch();
        pitch.start(1, 0);

        let first = pitch
            .record(pitch.goal.id, Some(pitch.player.id), 1, 120)
            .unwrap()
            .unwrap();
        let before = pitch.stats().unwrap();
        assert_eq!(before.goals, 1);

        let second = pitch
            .record(pitch.goal.id, Some(pitch.player.id), 1, 300)
            .unwrap()
            .unwrap();
        assert_eq!(pitch.stats().unwrap().goals, 2);

        assert!(DeleteEvent {
            event_id: second.id
        }
        .execute(&mut pitch.conn)
        .unwrap());
        assert_eq!(pitch.stats().unwrap(), before);

        assert!(DeleteEvent { event_id: first.id }
            .execute(&mut pitch.conn)
            .unwrap());
        assert_eq!(pitch.stats().unwrap().goals, 0);

        // deleting twice is a no-op and never drives the counter negative
        assert!(!DeleteEvent { event_id: first.id }
            .execute(&mut pitch.conn)
            .unwrap());
        assert_eq!(pitch.stats().unwrap().goals, 0);
    }

    #[test]
    fn each_category_feeds_its_own_counter() {
        let mut pitch = pitch();
        let team_id = pitch.team.id;
        let assist = event_type(team_id, "Assist", true)
            .execute(&mut pitch.conn)
            .unwrap();
        let yellow = event_type(team_id, "Yellow Card", true)
            .execute(&mut pitch.conn)
            .unwrap();
        let red = event_type(team_id, "Red Card", true)
            .execute(&mut pitch.conn)
            .unwrap();
        let shot = event_type(team_id, "Shot", true)
            .execute(&mut pitch.conn)
            .unwrap();

        pitch.start(1, 0);
        let player_id = Some(pitch.player.id);
        for (event_type_id, secs) in [
            (assist.id, 60),
            (assist.id, 90),
            (yellow.id, 200),
            (red.id, 400),
            (shot.id, 500),
        ] {
            pitch.record(event_type_id, player_id, 1, secs).unwrap();
        }

        let stats = pitch.stats().unwrap();
        assert_eq!(
            (stats.goals, stats.assists, stats.yellow_cards, stats.red_cards),
            (0, 2, 1, 1)
        );
    }

    #[test]
    fn recording_without_active_period_is_rejected() {
        let mut pitch = pitch();
        let (goal, player) = (pitch.goal.id, Some(pitch.player.id));

        let err = pitch.record(goal, player, 1, 10).unwrap_err();
        assert!(is_user_error(&err));

        pitch.start(1, 0);
        pitch.end(1, 1500);
        let err = pitch.record(goal, player, 1, 1600).unwrap_err();
        assert!(is_user_error(&err));

        pitch.start(2, 1800);
        let err = pitch.record(goal, player, 1, 1900).unwrap_err();
        assert!(is_user_error(&err));

        assert!(ListMatchEvents {
            match_id: pitch.fixture.id
        }
        .execute(&mut pitch.conn)
        .unwrap()
        .is_empty());
        assert_eq!(pitch.stats(), None);
    }

    #[test]
    fn player_required_event_needs_a_player() {
        let mut pitch = pitch();
        pitch.start(1, 0);

        let err = pitch.record(pitch.goal.id, None, 1, 30).unwrap_err();
        assert!(is_user_error(&err));
    }

    #[test]
    fn team_event_is_recorded_without_player() {
        let mut pitch = pitch();
        let corner = event_type(pitch.team.id, "Corner", false)
            .execute(&mut pitch.conn)
            .unwrap();
        pitch.start(1, 0);

        let event = pitch.record(corner.id, None, 1, 45).unwrap().unwrap();
        assert_eq!(event.player_id, None);
        assert_eq!(event.category, None);
        assert_eq!(pitch.stats(), None);
    }

    #[test]
    fn player_from_another_team_is_rejected() {
        let mut pitch = pitch();
        let other_team = CreateTeam {
            name: "Hillside".to_string(),
            age_group: None,
            at: kickoff(),
        }
        .execute(&mut pitch.conn)
        .unwrap();
        let stranger = AddPlayer {
            team_id: other_team.id,
            name: "Jo".to_string(),
            shirt_number: 4,
            position: None,
        }
        .execute(&mut pitch.conn)
        .unwrap();
        pitch.start(1, 0);

        let err = pitch
            .record(pitch.goal.id, Some(stranger.id), 1, 30)
            .unwrap_err();
        assert!(is_user_error(&err));
    }

    #[test]
    fn unknown_match_is_a_no_op() {
        let mut pitch = pitch();
        let recorded = RecordEvent {
            match_id: 999,
            event_type_id: pitch.goal.id,
            player_id: Some(pitch.player.id),
            period_number: 1,
            elapsed_secs: 0,
            at: kickoff(),
        }
        .execute(&mut pitch.conn)
        .unwrap();
        assert_eq!(recorded, None);
    }

    #[test]
    fn deleting_a_match_reverses_its_goals() {
        let mut pitch = pitch();
        pitch.start(1, 0);
        pitch
            .record(pitch.goal.id, Some(pitch.player.id), 1, 100)
            .unwrap();
        pitch
            .record(pitch.goal.id, Some(pitch.player.id), 1, 200)
            .unwrap();
        assert_eq!(pitch.stats().unwrap().goals, 2);

        DeleteMatch {
            match_id: pitch.fixture.id,
        }
        .execute(&mut pitch.conn)
        .unwrap();
        assert_eq!(pitch.stats().unwrap().goals, 0);
    }

    #[test]
    fn sync_status_is_the_only_mutable_field() {
        let mut pitch = pitch();
        pitch.start(1, 0);
        let event = pitch
            .record(pitch.goal.id, Some(pitch.player.id), 1, 100)
            .unwrap()
            .unwrap();

        assert!(SetEventSyncStatus {
            event_id: event.id,
            status: SyncStatus::Failed,
        }
        .execute(&mut pitch.conn)
        .unwrap());

        let stored = get_event(&pitch.conn, event.id).unwrap().unwrap();
        assert_eq!(
            stored,
            MatchEvent {
                sync_status: SyncStatus::Failed,
                ..event
            }
        );
        assert!(!SetEventSyncStatus {
            event_id: 404,
            status: SyncStatus::Synced,
        }
        .execute(&mut pitch.conn)
        .unwrap());
    }

    #[test]
    fn switched_off_event_type_cannot_be_recorded() {
        let mut pitch = pitch();
        SetEventTypeActive {
            id: pitch.goal.id,
            is_active: false,
        }
        .execute(&mut pitch.conn)
        .unwrap();
        pitch.start(1, 0);

        let err = pitch
            .record(pitch.goal.id, Some(pitch.player.id), 1, 10)
            .unwrap_err();
        assert!(is_user_error(&err));

        let visible = ListEventTypes {
            team_id: pitch.team.id,
            active_only: true,
        }
        .execute(&mut pitch.conn)
        .unwrap();
        assert!(visible.is_empty());
    }

    #[test]
    fn defaults_are_seeded_once_in_order() {
        let mut pitch = pitch();
        let other = CreateTeam {
            name: "Riverside U12".to_string(),
            age_group: None,
            at: kickoff(),
        }
        .execute(&mut pitch.conn)
        .unwrap();

        let seeded = SeedDefaultEventTypes { team_id: other.id }
            .execute(&mut pitch.conn)
            .unwrap();
        assert_eq!(seeded.len(), DEFAULT_EVENT_TYPES.len());

        let listed = ListEventTypes {
            team_id: other.id,
            active_only: false,
        }
        .execute(&mut pitch.conn)
        .unwrap();
        assert_eq!(listed, seeded);

        let conceded = listed
            .iter()
            .find(|event_type| event_type.name == "Goal Conceded")
            .unwrap();
        assert_eq!(conceded.category, None);

        assert!(SeedDefaultEventTypes { team_id: other.id }
            .execute(&mut pitch.conn)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn explicit_category_overrides_the_name() {
        let mut pitch = pitch();
        let created = CreateEventType {
            category: CategorySource::Explicit(None),
            ..event_type(pitch.team.id, "Goal Kick", false)
        }
        .execute(&mut pitch.conn)
        .unwrap();
        assert_eq!(created.category, None);
        assert_eq!(created.sort_order, pitch.goal.sort_order + 1);
    }
}
