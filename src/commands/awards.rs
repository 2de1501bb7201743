use anyhow::Result;
use chrono::Utc;

use crate::award::db::read::ListAwards;
use crate::award::db::write::GenerateSeasonAwards;
use crate::cli::AwardsCommand;
use crate::commands::resolve_season;
use crate::shared::AppContext;

pub async fn awards(ctx: &AppContext, command: AwardsCommand) -> Result<()> {
    match command {
        AwardsCommand::Generate { team, season } => {
            let season = resolve_season(&ctx.db, season).await?;
            let awards = ctx
                .db
                .request(GenerateSeasonAwards {
                    season_id: season.id,
                    team_id: team,
                    at: Utc::now(),
                })
                .await??;
            ctx.emit_list(&awards, "Nobody has scored or assisted yet, no awards")
        }
        AwardsCommand::List { team, season } => {
            let season = resolve_season(&ctx.db, season).await?;
            let awards = ctx
                .db
                .request(ListAwards {
                    season_id: season.id,
                    team_id: team,
                })
                .await??;
            ctx.emit_list(&awards, "No awards generated")
        }
    }
}
