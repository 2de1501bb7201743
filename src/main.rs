use std::process::ExitCode;

use anyhow::{Context as _, Result, anyhow};
use clap::Parser as _;
use tokio::sync::mpsc;
use tracing::{debug, info};

use cli::Cli;
use config::Config;
use db::DbHandle;
use session::Session;
use shared::AppContext;

mod award;
mod cli;
mod commands;
mod config;
mod db;
mod error;
mod event;
mod fixture;
mod log;
mod season;
mod session;
mod shared;
mod stats;
mod team;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = log::init_log(cli.verbose);

    _ = dotenvy::dotenv();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error::report_error(err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env(cli.db);

    let (db_tx, db_rx) = mpsc::channel(32);
    match db::db_thread::start_db_thread(db_rx, config.db_path.clone()).await {
        Ok(Ok(())) => {
            debug!(
                "Database thread has completed initialisation ({})",
                config.db_path.display()
            );
            Ok(())
        }
        Ok(Err(err)) => Err(anyhow!("Failed to initialise database thread: {err:#}")),
        Err(_) => Err(anyhow!("Database thread panicked during initialisation")),
    }?;

    let session = Session::load(&config.session_path()).context("Failed to restore session")?;

    let mut ctx = AppContext {
        db: DbHandle::new(db_tx),
        config,
        session,
        json: cli.json,
    };

    let user = ctx
        .session
        .user()
        .map_or_else(|| "anonymous".to_string(), |user| user.username.clone());
    info!("[>] command invoked by {user}");

    commands::run(&mut ctx, cli.command).await?;

    info!("[<] {user}'s command completed successfully");
    Ok(())
}
