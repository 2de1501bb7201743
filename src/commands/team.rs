use anyhow::{Result, anyhow};
use chrono::Utc;

use crate::cli::{PlayerCommand, TeamCommand};
use crate::error::UserError;
use crate::event::db::write::SeedDefaultEventTypes;
use crate::shared::AppContext;
use crate::team::db::read::{GetTeam, ListPlayers, ListTeams};
use crate::team::db::write::{AddPlayer, CreateTeam, DeleteTeam, RemovePlayer};

pub async fn team(ctx: &AppContext, command: TeamCommand) -> Result<()> {
    match command {
        TeamCommand::Create {
            name,
            age_group,
            no_defaults,
        } => {
            let team = ctx
                .db
                .request(CreateTeam {
                    name,
                    age_group,
                    at: Utc::now(),
                })
                .await??;

            if !no_defaults {
                let seeded = ctx
                    .db
                    .request(SeedDefaultEventTypes { team_id: team.id })
                    .await??;
                ctx.note(format!("Installed {} default event types", seeded.len()));
            }
            ctx.emit(&team)
        }
        TeamCommand::List => {
            let teams = ctx.db.request(ListTeams).await??;
            ctx.emit_list(&teams, "No teams yet")
        }
        TeamCommand::Delete { id } => {
            if ctx.db.request(DeleteTeam { id }).await?? {
                ctx.note(format!("Deleted team {id}"));
            } else {
                ctx.note(format!("No team {id}, nothing deleted"));
            }
            Ok(())
        }
    }
}

pub async fn player(ctx: &AppContext, command: PlayerCommand) -> Result<()> {
    match command {
        PlayerCommand::Add {
            team,
            name,
            number,
            position,
        } => {
            let player = ctx
                .db
                .request(AddPlayer {
                    team_id: team,
                    name,
                    shirt_number: number,
                    position,
                })
                .await??;
            ctx.emit(&player)
        }
        PlayerCommand::List { team } => {
            let Some(team) = ctx.db.request(GetTeam { id: team }).await?? else {
                return Err(UserError(anyhow!("Team {team} does not exist")).into());
            };
            let players = ctx.db.request(ListPlayers { team_id: team.id }).await??;

            ctx.note(format!("{team}:"));
            ctx.emit_list(&players, "No players yet")
        }
        PlayerCommand::Remove { id } => {
            if ctx.db.request(RemovePlayer { id }).await?? {
                ctx.note(format!("Removed player {id}"));
            } else {
                ctx.note(format!("No player {id}, nothing removed"));
            }
            Ok(())
        }
    }
}
