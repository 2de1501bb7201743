//! Explicit login state. A `Session` is loaded once per invocation and handed to whatever needs
//! it; there is no process-wide "current user".

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context as _, Result, anyhow, bail};
use chrono::Utc;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::DbHandle;
use crate::error::UserError;
use crate::session::db::write::RecordLogin;

pub mod db;
pub mod types;

pub use types::{Session, User};

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(user) => Some(user),
        }
    }

    pub fn require_user(&self) -> Result<&User> {
        self.user()
            .ok_or_else(|| UserError(anyhow!("You must log in first (`pitchside login`)")).into())
    }

    /// Checks the credential against the configured one and records the login.
    pub async fn login(
        &mut self,
        db: &DbHandle,
        config: &Config,
        username: &str,
        password: &str,
    ) -> Result<&User> {
        if !credentials_match(config, username, password) {
            warn!("Rejected login attempt for {username:?}");
            bail!(UserError(anyhow!("Invalid username or password")));
        }

        let user = db
            .request(RecordLogin {
                username: config.username.clone(),
                at: Utc::now(),
            })
            .await?
            .context("Failed to record login")?;

        info!("{} logged in", user.username);
        if config.uses_demo_password() {
            warn!("Logged in with the demo credential, set PITCHSIDE_PASSWORD to replace it");
        }
        *self = Session::Authenticated(user);
        Ok(self.require_user()?)
    }

    /// Returns the user that was logged in, if any.
    pub fn logout(&mut self) -> Option<User> {
        match std::mem::take(self) {
            Session::Anonymous => None,
            Session::Authenticated(user) => {
                info!("{} logged out", user.username);
                Some(user)
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse session file {}", path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Session::Anonymous),
            Err(err) => Err(err)
                .with_context(|| format!("Failed to read session file {}", path.display())),
        }
    }

    /// Persists the session; an anonymous session removes the file.
    pub fn store(&self, path: &Path) -> Result<()> {
        match self {
            Session::Anonymous => match fs::remove_file(path) {
                Err(err) if err.kind() != ErrorKind::NotFound => Err(err)
                    .with_context(|| format!("Failed to remove session file {}", path.display())),
                _ => Ok(()),
            },
            Session::Authenticated(_) => {
                let contents = serde_json::to_string_pretty(self)?;
                fs::write(path, contents)
                    .with_context(|| format!("Failed to write session file {}", path.display()))
            }
        }
    }
}

fn credentials_match(config: &Config, username: &str, password: &str) -> bool {
    username.trim().eq_ignore_ascii_case(&config.username) && password == config.password
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::error::is_user_error;

    fn config() -> Config {
        Config {
            db_path: PathBuf::from(":memory:"),
            username: "coach".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn credential_check_ignores_username_case() {
        assert!(credentials_match(&config(), " Coach ", "secret"));
        assert!(!credentials_match(&config(), "coach", "Secret"));
        assert!(!credentials_match(&config(), "parent", "secret"));
    }

    #[test]
    fn anonymous_session_has_no_user() {
        let session = Session::Anonymous;
        let err = session.require_user().unwrap_err();
        assert!(is_user_error(&err));
    }

    #[test]
    fn logout_returns_previous_user() {
        let user = User {
            id: 1,
            username: "coach".to_string(),
            created_at: Utc::now(),
            last_login_at: Utc::now(),
        };
        let mut session = Session::Authenticated(user.clone());

        assert_eq!(session.logout(), Some(user));
        assert_eq!(session, Session::Anonymous);
        assert_eq!(session.logout(), None);
    }

    #[test]
    fn session_round_trips_through_file() {
        let path = std::env::temp_dir().join(format!("pitchside-session-{}.json", std::process::id()));
        let session = Session::Authenticated(User {
            id: 7,
            username: "coach".to_string(),
            created_at: Utc::now(),
            last_login_at: Utc::now(),
        });

        session.store(&path).unwrap();
        assert_eq!(Session::load(&path).unwrap(), session);

        Session::Anonymous.store(&path).unwrap();
        assert_eq!(Session::load(&path).unwrap(), Session::Anonymous);
    }

    #[tokio::test]
    async fn login_goes_through_the_database_thread() {
        let (tx, rx) = tokio::sync::mpsc::channel(8);
        let path = std::env::temp_dir().join(format!("pitchside-login-{}.sqlite3", std::process::id()));
        let _ = fs::remove_file(&path);
        crate::db::db_thread::start_db_thread(rx, path.clone())
            .await
            .unwrap()
            .unwrap();
        let db = DbHandle::new(tx);

        let mut session = Session::Anonymous;
        let err = session
            .login(&db, &config(), "coach", "wrong")
            .await
            .unwrap_err();
        assert!(is_user_error(&err));
        assert_eq!(session, Session::Anonymous);

        let user = session
            .login(&db, &config(), "coach", "secret")
            .await
            .unwrap()
            .clone();
        assert_eq!(user.username, "coach");
        assert_eq!(session.user(), Some(&user));

        drop(db);
        let _ = fs::remove_file(&path);
    }
}
