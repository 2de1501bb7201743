use anyhow::{Result, anyhow, bail};

use crate::commands::resolve_season;
use crate::error::UserError;
use crate::shared::AppContext;
use crate::stats::db::read::{GetPlayerStats, ListSeasonStats};
use crate::stats::types::StatLine;
use crate::team::db::read::GetPlayer;

pub async fn stats(
    ctx: &AppContext,
    team_id: i64,
    season_id: Option<i64>,
    player_id: Option<i64>,
) -> Result<()> {
    let season = resolve_season(&ctx.db, season_id).await?;
    ctx.note(format!("{season}:"));

    let Some(player_id) = player_id else {
        let lines = ctx
            .db
            .request(ListSeasonStats {
                team_id,
                season_id: season.id,
            })
            .await??;
        return ctx.emit_list(&lines, "No statistics recorded");
    };

    let player = ctx
        .db
        .request(GetPlayer { id: player_id })
        .await??
        .filter(|player| player.team_id == team_id)
        .ok_or_else(|| UserError(anyhow!("Player {player_id} is not in team {team_id}")))?;

    match ctx
        .db
        .request(GetPlayerStats {
            player_id,
            season_id: season.id,
        })
        .await??
    {
        Some(stats) => ctx.emit(&StatLine { player, stats }),
        None if ctx.json => bail!(UserError(anyhow!(
            "{player} has no statistics in this season"
        ))),
        None => {
            ctx.note(format!("{player} has no statistics in this season"));
            Ok(())
        }
    }
}
