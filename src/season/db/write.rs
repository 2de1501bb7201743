use anyhow::{anyhow, bail};
use chrono::NaiveDate;
use rusqlite::{Connection, Transaction, params};
use tracing::{info, warn};

use crate::db::DbRequest;
use crate::error::UserError;
use crate::season::db::read::{current_season, get_season};
use crate::season::types::Season;

fn make_current(transaction: &Transaction, id: i64) -> Result<(), rusqlite::Error> {
    transaction.execute(
        "UPDATE seasons SET is_current = (id = ?1)",
        params![id],
    )?;
    Ok(())
}

/// Creates a season. The first season ever created becomes current regardless of
/// `make_current`.
pub struct CreateSeason {
    pub name: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub make_current: bool,
}
impl DbRequest for CreateSeason {
    type ReturnValue = anyhow::Result<Season>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            bail!(UserError(anyhow!("Season name cannot be empty")));
        }
        if self.ends_on < self.starts_on {
            bail!(UserError(anyhow!(
                "Season cannot end ({}) before it starts ({})",
                self.ends_on,
                self.starts_on
            )));
        }

        let transaction = conn.transaction()?;

        transaction.execute(
            "INSERT INTO seasons (name, starts_on, ends_on) VALUES (?1, ?2, ?3)",
            params![name, self.starts_on, self.ends_on],
        )?;
        let id = transaction.last_insert_rowid();

        let is_current = self.make_current || current_season(&transaction)?.is_none();
        if is_current {
            make_current(&transaction, id)?;
        }

        transaction.commit()?;
        info!("Created season {id} ({name}), current: {is_current}");

        Ok(Season {
            id,
            name,
            starts_on: self.starts_on,
            ends_on: self.ends_on,
            is_current,
        })
    }
}

pub struct SetCurrentSeason {
    pub id: i64,
}
impl DbRequest for SetCurrentSeason {
    type ReturnValue = anyhow::Result<Option<Season>>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        let transaction = conn.transaction()?;

        let Some(mut season) = get_season(&transaction, self.id)? else {
            warn!("Attempted to select unknown season {}", self.id);
            return Ok(None);
        };

        make_current(&transaction, self.id)?;
        transaction.commit()?;

        season.is_current = true;
        info!("Season {} is now current", season.id);
        Ok(Some(season))
    }
}
