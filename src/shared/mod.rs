use std::fmt::Display;

use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::db::DbHandle;
use crate::session::{Session, User};

pub mod types;

/// Everything a command needs, built once in `main` and passed down.
pub struct AppContext {
    pub db: DbHandle,
    pub config: Config,
    pub session: Session,
    /// Print results as JSON instead of text.
    pub json: bool,
}

impl AppContext {
    pub fn user(&self) -> Result<&User> {
        self.session.require_user()
    }

    pub fn emit<T>(&self, value: &T) -> Result<()>
    where
        T: Serialize + Display,
    {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{value}");
        }
        Ok(())
    }

    pub fn emit_list<T>(&self, items: &[T], empty: &str) -> Result<()>
    where
        T: Serialize + Display,
    {
        if self.json {
            println!("{}", serde_json::to_string_pretty(items)?);
        } else if items.is_empty() {
            println!("{empty}");
        } else {
            for item in items {
                println!("{item}");
            }
        }
        Ok(())
    }

    /// Plain status line; suppressed in JSON mode so the output stays parseable.
    pub fn note(&self, message: impl Display) {
        if !self.json {
            println!("{message}");
        }
    }
}
