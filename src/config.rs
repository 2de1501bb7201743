use std::env;
use std::path::PathBuf;

use tracing::debug;

// default location of the database file, overridden by `PITCHSIDE_DB` or `--db`
pub const DEFAULT_DB_PATH: &str = "./data/pitchside.sqlite3";
// stored next to the database file, holds the logged-in user between invocations
pub const SESSION_FILE: &str = "session.json";

pub const LOG_DIR: &str = "logs/";
pub const LOG_FILE: &str = "pitchside.log";

// used when a match is created without an explicit format
pub const DEFAULT_PERIODS: u32 = 2;
pub const DEFAULT_PERIOD_MINUTES: u32 = 25;

// refresh rate of `match watch`
pub const CLOCK_TICK_SECS: u64 = 1;

// demo credential, overridden by `PITCHSIDE_USER` / `PITCHSIDE_PASSWORD`
pub const DEMO_USERNAME: &str = "coach";
pub const DEMO_PASSWORD: &str = "pitchside";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub username: String,
    pub password: String,
}

impl Config {
    /// Builds the configuration from the environment (after `.env` has been loaded). An explicit
    /// database path takes precedence over `PITCHSIDE_DB`.
    pub fn from_env(db_override: Option<PathBuf>) -> Self {
        let db_path = db_override
            .or_else(|| env::var_os("PITCHSIDE_DB").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let username = env::var("PITCHSIDE_USER").unwrap_or_else(|_| DEMO_USERNAME.to_string());
        let password = env::var("PITCHSIDE_PASSWORD").unwrap_or_else(|_| {
            debug!("No PITCHSIDE_PASSWORD set, using the demo credential");
            DEMO_PASSWORD.to_string()
        });

        Self {
            db_path,
            username,
            password,
        }
    }

    pub fn uses_demo_password(&self) -> bool {
        self.password == DEMO_PASSWORD
    }

    pub fn session_path(&self) -> PathBuf {
        self.db_path.with_file_name(SESSION_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_file_sits_next_to_database() {
        let config = Config {
            db_path: PathBuf::from("/tmp/club/pitchside.sqlite3"),
            username: DEMO_USERNAME.to_string(),
            password: DEMO_PASSWORD.to_string(),
        };
        assert_eq!(
            config.session_path(),
            PathBuf::from("/tmp/club/session.json")
        );
    }

    #[test]
    fn demo_password_is_recognised() {
        let mut config = Config {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            username: DEMO_USERNAME.to_string(),
            password: DEMO_PASSWORD.to_string(),
        };
        assert!(config.uses_demo_password());

        config.password = "s3cret".to_string();
        assert!(!config.uses_demo_password());
    }

    #[test]
    fn explicit_path_wins() {
        let config = Config::from_env(Some(PathBuf::from("override.sqlite3")));
        assert_eq!(config.db_path, PathBuf::from("override.sqlite3"));
    }
}
