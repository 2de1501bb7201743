use anyhow::{Result, anyhow, bail};
use chrono::Utc;
use tracing::warn;

use crate::cli::EventCommand;
use crate::error::UserError;
use crate::event::db::read::{GetEventType, ListMatchEvents};
use crate::event::db::write::{DeleteEvent, SetEventSyncStatus};
use crate::event::selection::{EventSelection, SelectionOutcome};
use crate::fixture::db::read::GetMatchClock;
use crate::shared::AppContext;
use crate::team::db::read::ListPlayers;

pub async fn event(ctx: &AppContext, command: EventCommand) -> Result<()> {
    match command {
        EventCommand::Record {
            match_id,
            event_type,
            player,
            elapsed,
        } => record(ctx, match_id, event_type, player, elapsed).await,
        EventCommand::Delete { id } => {
            if ctx.db.request(DeleteEvent { event_id: id }).await?? {
                ctx.note(format!("Deleted event {id}"));
            } else {
                ctx.note(format!("No event {id}, nothing deleted"));
            }
            Ok(())
        }
        EventCommand::List { match_id } => {
            let events = ctx.db.request(ListMatchEvents { match_id }).await??;
            ctx.emit_list(&events, "No events recorded")
        }
        EventCommand::Sync { id, status } => {
            if ctx
                .db
                .request(SetEventSyncStatus {
                    event_id: id,
                    status,
                })
                .await??
            {
                ctx.note(format!("Event {id} marked {status}"));
            } else {
                ctx.note(format!("No event {id}"));
            }
            Ok(())
        }
    }
}

async fn record(
    ctx: &AppContext,
    match_id: i64,
    event_type_id: i64,
    player_id: Option<i64>,
    elapsed: Option<i64>,
) -> Result<()> {
    let Some((fixture, clock)) = ctx.db.request(GetMatchClock { match_id }).await?? else {
        bail!(UserError(anyhow!("Match {match_id} does not exist")));
    };
    let Some(period_number) = fixture.state.active_period() else {
        bail!(UserError(anyhow!(
            "No period of match {match_id} is in play ({}), start one before recording events",
            fixture.state
        )));
    };
    let event_type = ctx
        .db
        .request(GetEventType { id: event_type_id })
        .await??
        .ok_or_else(|| UserError(anyhow!("Event type {event_type_id} does not exist")))?;

    let mut selection = EventSelection::default();
    let pending = match selection.select_event_type(event_type) {
        SelectionOutcome::Record(pending) => {
            if let Some(player_id) = player_id {
                warn!(
                    "'{}' is a team event, ignoring player {player_id}",
                    pending.event_type.name
                );
            }
            pending
        }
        SelectionOutcome::AwaitingPlayer => match player_id {
            Some(player_id) => selection
                .select_player(player_id)
                .ok_or_else(|| anyhow!("Event selection lost its event type"))?,
            None => {
                let roster = ctx
                    .db
                    .request(ListPlayers {
                        team_id: fixture.team_id,
                    })
                    .await??;
                let choices: Vec<String> = roster.iter().map(ToString::to_string).collect();
                let name = selection
                    .cancel()
                    .map(|event_type| event_type.name)
                    .unwrap_or_default();
                bail!(UserError(anyhow!(
                    "'{name}' needs a player, pick one with --player:\n{}",
                    choices.join("\n")
                )));
            }
        },
    };

    let elapsed_secs = elapsed.unwrap_or_else(|| clock.elapsed_secs(Utc::now()));
    let request = pending.into_request(fixture.id, period_number, elapsed_secs, Utc::now());

    match ctx.db.request(request).await?? {
        Some(event) => ctx.emit(&event),
        None => bail!(UserError(anyhow!("Match {match_id} does not exist"))),
    }
}
