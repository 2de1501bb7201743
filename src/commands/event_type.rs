use anyhow::{Result, anyhow};

use crate::cli::{CreateEventTypeArgs, EventTypeCommand};
use crate::error::UserError;
use crate::event::db::read::ListEventTypes;
use crate::event::db::write::{
    CategorySource, CreateEventType, SeedDefaultEventTypes, SetEventTypeActive,
};
use crate::event::types::StatCategory;
use crate::shared::AppContext;

fn category_source(category: Option<&str>) -> Result<CategorySource> {
    match category {
        None => Ok(CategorySource::FromName),
        Some(text) if text.trim().eq_ignore_ascii_case("none") => {
            Ok(CategorySource::Explicit(None))
        }
        Some(text) => {
            let category: StatCategory = text.parse().map_err(|err| {
                let known: Vec<&str> = StatCategory::ALL.iter().map(|c| c.as_str()).collect();
                UserError(anyhow!("{err}, expected none or one of {}", known.join(", ")))
            })?;
            Ok(CategorySource::Explicit(Some(category)))
        }
    }
}

pub async fn event_type(ctx: &AppContext, command: EventTypeCommand) -> Result<()> {
    match command {
        EventTypeCommand::Create(CreateEventTypeArgs {
            team,
            name,
            icon,
            color,
            requires_player,
            negative,
            sort_order,
            category,
        }) => {
            let event_type = ctx
                .db
                .request(CreateEventType {
                    team_id: team,
                    name,
                    icon,
                    color,
                    requires_player,
                    is_positive: !negative,
                    sort_order,
                    category: category_source(category.as_deref())?,
                })
                .await??;
            ctx.emit(&event_type)
        }
        EventTypeCommand::List { team, all } => {
            let event_types = ctx
                .db
                .request(ListEventTypes {
                    team_id: team,
                    active_only: !all,
                })
                .await??;
            ctx.emit_list(&event_types, "No event types, try `event-type seed`")
        }
        EventTypeCommand::Enable { id } => set_active(ctx, id, true).await,
        EventTypeCommand::Disable { id } => set_active(ctx, id, false).await,
        EventTypeCommand::Seed { team } => {
            let seeded = ctx
                .db
                .request(SeedDefaultEventTypes { team_id: team })
                .await??;
            ctx.emit_list(&seeded, "Team already has event types, nothing seeded")
        }
    }
}

async fn set_active(ctx: &AppContext, id: i64, is_active: bool) -> Result<()> {
    if ctx
        .db
        .request(SetEventTypeActive { id, is_active })
        .await??
    {
        let state = if is_active { "enabled" } else { "disabled" };
        ctx.note(format!("Event type {id} {state}"));
    } else {
        ctx.note(format!("No event type {id}"));
    }
    Ok(())
}
