use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, params};

use crate::db::DbRequest;
use crate::session::types::User;

/// Creates the user on first login and stamps the login time.
pub struct RecordLogin {
    pub username: String,
    pub at: DateTime<Utc>,
}
impl DbRequest for RecordLogin {
    type ReturnValue = Result<User>;

    fn execute(self, conn: &mut Connection) -> Self::ReturnValue {
        conn.query_one(
            "
            INSERT INTO users (username, created_at, last_login_at)
            VALUES (?1, ?2, ?2)
            ON CONFLICT(username) DO UPDATE SET
                last_login_at = excluded.last_login_at
            RETURNING id, username, created_at, last_login_at
            ",
            params![self.username, self.at],
            |row| {
                Ok(User {
                    id: row.get("id")?,
                    username: row.get("username")?,
                    created_at: row.get("created_at")?,
                    last_login_at: row.get("last_login_at")?,
                })
            },
        )
    }
}
