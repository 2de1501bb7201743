use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub age_group: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.id, self.name)?;
        if let Some(age_group) = &self.age_group {
            write!(f, " ({age_group})")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: i64,
    pub team_id: i64,
    pub name: String,
    pub shirt_number: u32,
    pub position: Option<String>,
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] #{} {}", self.id, self.shirt_number, self.name)?;
        if let Some(position) = &self.position {
            write!(f, ", {position}")?;
        }
        Ok(())
    }
}
