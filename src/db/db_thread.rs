use std::path::{Path, PathBuf};
use std::{fs, thread};

use anyhow::{Context as _, Result, bail};
use rusqlite::Connection;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::db::ErasedDbRequest;

// bumped whenever tables or indexes change; see `migrate_schema`
pub const SCHEMA_VERSION: i32 = 2;

pub fn start_db_thread(
    mut rx: mpsc::Receiver<Box<dyn ErasedDbRequest>>,
    path: PathBuf,
) -> oneshot::Receiver<Result<()>> {
    let (ready_tx, ready_rx) = oneshot::channel();

    thread::spawn(move || {
        let mut conn = match open_database(&path) {
            Ok(conn) => conn,
            Err(err) => {
                let _ = ready_tx.send(Err(err.context("Failed to initialise database")));
                return;
            }
        };

        let _ = ready_tx.send(Ok(()));

        while let Some(request) = rx.blocking_recv() {
            request.execute_boxed(&mut conn);
        }

        debug!("All database handles dropped, closing connection");
    });

    ready_rx
}

fn open_database(path: &Path) -> Result<Connection> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).context("Unable to create database directory")?;
    }

    let mut conn = Connection::open(path).context("Unable to load database file")?;
    initialise_database(&mut conn)?;
    Ok(conn)
}

pub fn initialise_database(conn: &mut Connection) -> Result<()> {
    let version: i32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .context("Failed to read schema version")?;

    if version > SCHEMA_VERSION {
        bail!(
            "Database schema version {version} is newer than supported version {SCHEMA_VERSION}"
        );
    }

    crate::session::db::initialise_tables(conn)?;
    crate::team::db::initialise_tables(conn)?;
    crate::season::db::initialise_tables(conn)?;
    crate::fixture::db::initialise_tables(conn)?;
    crate::event::db::initialise_tables(conn)?;
    crate::stats::db::initialise_tables(conn)?;
    crate::award::db::initialise_tables(conn)?;

    migrate_schema(conn, version)?;
    Ok(())
}

fn migrate_schema(conn: &mut Connection, from_version: i32) -> Result<()> {
    if from_version == SCHEMA_VERSION {
        return Ok(());
    }

    let transaction = conn.transaction()?;

    // version 1 stored event types without an explicit statistic category
    if from_version == 1 {
        transaction
            .execute_batch("ALTER TABLE event_types ADD COLUMN category TEXT;")
            .context("Failed to add event type category column")?;
    }

    if from_version < 2 {
        let classified = crate::event::db::write::backfill_categories(&transaction)
            .context("Failed to classify existing event types")?;
        if classified > 0 {
            info!("Classified {classified} existing event type(s) by name");
        }
    }

    transaction.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    transaction.commit()?;

    info!("Database schema migrated from version {from_version} to {SCHEMA_VERSION}");
    Ok(())
}
