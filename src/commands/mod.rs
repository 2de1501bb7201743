use anyhow::{Result, anyhow};

use crate::cli::Command;
use crate::db::DbHandle;
use crate::error::UserError;
use crate::season::db::read::{GetCurrentSeason, GetSeason};
use crate::season::types::Season;
use crate::shared::AppContext;

mod awards;
mod event;
mod event_type;
mod fixture;
mod season;
mod session;
mod stats;
mod team;

pub async fn run(ctx: &mut AppContext, command: Command) -> Result<()> {
    if command.requires_login() {
        ctx.user()?;
    }

    match command {
        Command::Login { username, password } => session::login(ctx, username, password).await,
        Command::Logout => session::logout(ctx),
        Command::Team(command) => team::team(ctx, command).await,
        Command::Player(command) => team::player(ctx, command).await,
        Command::Season(command) => season::season(ctx, command).await,
        Command::EventType(command) => event_type::event_type(ctx, command).await,
        Command::Match(command) => fixture::fixture(ctx, command).await,
        Command::Event(command) => event::event(ctx, command).await,
        Command::Stats {
            team,
            season,
            player,
        } => stats::stats(ctx, team, season, player).await,
        Command::Awards(command) => awards::awards(ctx, command).await,
    }
}

/// The given season, or the current one.
async fn resolve_season(db: &DbHandle, season_id: Option<i64>) -> Result<Season> {
    match season_id {
        Some(id) => db
            .request(GetSeason { id })
            .await??
            .ok_or_else(|| UserError(anyhow!("Season {id} does not exist")).into()),
        None => db
            .request(GetCurrentSeason)
            .await??
            .ok_or_else(|| UserError(anyhow!("No current season, create one first")).into()),
    }
}
