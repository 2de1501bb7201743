use anyhow::Result;
use chrono::Utc;
use tracing::warn;

use crate::cli::SeasonCommand;
use crate::season::db::read::{GetCurrentSeason, ListSeasons};
use crate::season::db::write::{CreateSeason, SetCurrentSeason};
use crate::shared::AppContext;

pub async fn season(ctx: &AppContext, command: SeasonCommand) -> Result<()> {
    match command {
        SeasonCommand::Create {
            name,
            start,
            end,
            current,
        } => {
            let season = ctx
                .db
                .request(CreateSeason {
                    name,
                    starts_on: start,
                    ends_on: end,
                    make_current: current,
                })
                .await??;
            ctx.emit(&season)
        }
        SeasonCommand::List => {
            let seasons = ctx.db.request(ListSeasons).await??;
            ctx.emit_list(&seasons, "No seasons yet")
        }
        SeasonCommand::Current => match ctx.db.request(GetCurrentSeason).await?? {
            Some(season) => {
                if !season.contains(Utc::now().date_naive()) {
                    warn!("Current season {season} does not include today");
                }
                ctx.emit(&season)
            }
            None => {
                ctx.note("No current season");
                Ok(())
            }
        },
        SeasonCommand::SetCurrent { id } => {
            match ctx.db.request(SetCurrentSeason { id }).await?? {
                Some(season) => ctx.emit(&season),
                None => {
                    ctx.note(format!("No season {id}, current season unchanged"));
                    Ok(())
                }
            }
        }
    }
}
