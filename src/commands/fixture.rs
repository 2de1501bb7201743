use std::fmt::Display;
use std::io::Write as _;
use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use chrono::Utc;
use serde::Serialize;
use tokio::select;
use tracing::{debug, info};

use crate::cli::MatchCommand;
use crate::config::CLOCK_TICK_SECS;
use crate::error::UserError;
use crate::fixture::clock::MatchClock;
use crate::fixture::db::read::{GetMatch, GetMatchClock, ListMatches, ListPeriods};
use crate::fixture::db::write::{CreateMatch, DeleteMatch, EndPeriod, SetFinalScore, StartPeriod};
use crate::fixture::types::{Match, MatchState, NextAction};
use crate::shared::AppContext;

#[derive(Serialize)]
struct ClockView {
    #[serde(rename = "match")]
    fixture: Match,
    clock: String,
    elapsed_secs: i64,
    next_action: NextAction,
}

impl ClockView {
    fn new(fixture: Match, clock: &MatchClock) -> Self {
        let now = Utc::now();
        Self {
            next_action: fixture.next_action(),
            clock: clock.display(now),
            elapsed_secs: clock.elapsed_secs(now),
            fixture,
        }
    }
}

impl Display for ClockView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}, next: {}",
            self.fixture, self.clock, self.next_action
        )
    }
}

async fn get_match(ctx: &AppContext, id: i64) -> Result<Match> {
    ctx.db
        .request(GetMatch { id })
        .await??
        .ok_or_else(|| UserError(anyhow!("Match {id} does not exist")).into())
}

pub async fn fixture(ctx: &AppContext, command: MatchCommand) -> Result<()> {
    match command {
        MatchCommand::Create {
            team,
            opponent,
            kickoff,
            venue,
            periods,
            period_minutes,
        } => {
            let fixture = ctx
                .db
                .request(CreateMatch {
                    team_id: team,
                    opponent,
                    kickoff: kickoff.unwrap_or_else(Utc::now),
                    venue,
                    total_periods: periods,
                    period_minutes,
                })
                .await??;
            ctx.emit(&fixture)
        }
        MatchCommand::List { team } => {
            let fixtures = ctx.db.request(ListMatches { team_id: team }).await??;
            ctx.emit_list(&fixtures, "No matches yet")
        }
        MatchCommand::StartPeriod { id, period } => {
            let period_number = match period {
                Some(period_number) => period_number,
                None => match get_match(ctx, id).await?.next_action() {
                    NextAction::StartPeriod(n) => n,
                    // the period in play is ended implicitly by starting the next one
                    NextAction::EndPeriod(n) => n + 1,
                    NextAction::MatchComplete => {
                        bail!(UserError(anyhow!("Match {id} is already complete")))
                    }
                },
            };

            match ctx
                .db
                .request(StartPeriod {
                    match_id: id,
                    period_number,
                    at: Utc::now(),
                })
                .await??
            {
                Some(period) => ctx.emit(&period),
                None => bail!(UserError(anyhow!("Match {id} does not exist"))),
            }
        }
        MatchCommand::EndPeriod { id } => {
            let fixture = get_match(ctx, id).await?;
            let Some(period_number) = fixture.state.active_period() else {
                ctx.note(format!("No period of match {id} is in play ({})", fixture.state));
                return Ok(());
            };

            if let Some(period) = ctx
                .db
                .request(EndPeriod {
                    match_id: id,
                    period_number,
                    at: Utc::now(),
                })
                .await??
            {
                ctx.emit(&period)?;
            }
            Ok(())
        }
        MatchCommand::Clock { id } => {
            let Some((fixture, clock)) = ctx.db.request(GetMatchClock { match_id: id }).await??
            else {
                bail!(UserError(anyhow!("Match {id} does not exist")));
            };

            let periods = ctx.db.request(ListPeriods { match_id: id }).await??;
            ctx.emit(&ClockView::new(fixture, &clock))?;
            if !ctx.json {
                for period in &periods {
                    println!("  {period}");
                }
            }
            Ok(())
        }
        MatchCommand::Watch { id } => watch(ctx, id).await,
        MatchCommand::Score {
            id,
            team_score,
            opponent_score,
        } => {
            match ctx
                .db
                .request(SetFinalScore {
                    match_id: id,
                    team_score,
                    opponent_score,
                    at: Utc::now(),
                })
                .await??
            {
                Some(fixture) => ctx.emit(&fixture),
                None => bail!(UserError(anyhow!("Match {id} does not exist"))),
            }
        }
        MatchCommand::Delete { id } => {
            if ctx.db.request(DeleteMatch { match_id: id }).await?? {
                ctx.note(format!("Deleted match {id}"));
            } else {
                ctx.note(format!("No match {id}, nothing deleted"));
            }
            Ok(())
        }
    }
}

/// Redraws the clock every tick from the stored periods, so starting or ending a period from
/// another terminal shows up on the next tick. Stops on ctrl-c or when the match completes.
async fn watch(ctx: &AppContext, id: i64) -> Result<()> {
    watch_until(ctx, id, tokio::signal::ctrl_c()).await
}

/// The stop future is created once and polled across ticks, so a stop that arrives while a
/// clock read is in flight is still seen on the next pass.
async fn watch_until<F>(ctx: &AppContext, id: i64, stop: F) -> Result<()>
where
    F: Future,
{
    let mut interval = tokio::time::interval(Duration::from_secs(CLOCK_TICK_SECS));
    tokio::pin!(stop);
    info!("Watching the clock of match {id}");

    loop {
        select! {
            _ = interval.tick() => (),
            _ = &mut stop => {
                debug!("Clock watch interrupted");
                break;
            }
        }

        let Some((fixture, clock)) = ctx.db.request(GetMatchClock { match_id: id }).await?? else {
            bail!(UserError(anyhow!("Match {id} does not exist")));
        };
        let completed = fixture.state == MatchState::Completed;
        let view = ClockView::new(fixture, &clock);

        if ctx.json {
            println!("{}", serde_json::to_string(&view)?);
        } else {
            print!("\r{}  {:<24}", view.clock, view.fixture.state.to_string());
            std::io::stdout().flush()?;
        }

        if completed {
            break;
        }
    }

    if !ctx.json {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::future::{pending, ready};
    use std::path::PathBuf;

    use tokio::sync::mpsc;
    use tokio::time::timeout;

    use super::*;
    use crate::config::{Config, DEMO_PASSWORD, DEMO_USERNAME};
    use crate::db::DbHandle;
    use crate::error::is_user_error;
    use crate::fixture::types::Venue;
    use crate::session::Session;
    use crate::team::db::write::CreateTeam;

    async fn context(name: &str) -> AppContext {
        let path: PathBuf = std::env::temp_dir().join(format!(
            "pitchside-watch-{name}-{}.sqlite3",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let (tx, rx) = mpsc::channel(8);
        crate::db::db_thread::start_db_thread(rx, path.clone())
            .await
            .unwrap()
            .unwrap();

        AppContext {
            db: DbHandle::new(tx),
            config: Config {
                db_path: path,
                username: DEMO_USERNAME.to_string(),
                password: DEMO_PASSWORD.to_string(),
            },
            session: Session::Anonymous,
            json: true,
        }
    }

    async fn new_match(ctx: &AppContext) -> Match {
        let team = ctx
            .db
            .request(CreateTeam {
                name: "Riverside U10".to_string(),
                age_group: None,
                at: Utc::now(),
            })
            .await
            .unwrap()
            .unwrap();
        ctx.db
            .request(CreateMatch {
                team_id: team.id,
                opponent: "Hillside".to_string(),
                kickoff: Utc::now(),
                venue: Venue::Home,
                total_periods: 2,
                period_minutes: 25,
            })
            .await
            .unwrap()
            .unwrap()
    }

    #[tokio::test]
    async fn watch_stops_when_asked() {
        let ctx = context("stop").await;
        let fixture = new_match(&ctx).await;

        timeout(Duration::from_secs(5), watch_until(&ctx, fixture.id, ready(())))
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn watch_ends_with_the_match() {
        let ctx = context("completed").await;
        let fixture = new_match(&ctx).await;
        ctx.db
            .request(SetFinalScore {
                match_id: fixture.id,
                team_score: 2,
                opponent_score: 1,
                at: Utc::now(),
            })
            .await
            .unwrap()
            .unwrap()
            .unwrap();

        timeout(Duration::from_secs(5), watch_until(&ctx, fixture.id, pending::<()>()))
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn watching_an_unknown_match_fails() {
        let ctx = context("unknown").await;

        let err = timeout(Duration::from_secs(5), watch_until(&ctx, 42, pending::<()>()))
            .await
            .unwrap()
            .unwrap_err();
        assert!(is_user_error(&err));
    }
}
