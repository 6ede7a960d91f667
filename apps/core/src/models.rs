use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Author of a logged message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Text typed by the person chatting.
    User,
    /// Reply produced by the responder.
    Bot,
}

impl Role {
    /// Returns the value persisted in the `role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Bot => "bot",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "bot" => Ok(Role::Bot),
            other => Err(AppError::Validation(format!("Unknown message role: {}", other))),
        }
    }
}

/// Represents a single entry of the conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Auto-incremented identifier, also the ordering key.
    pub id: i64,
    /// The user this message belongs to.
    pub user: String,
    /// Who wrote the message.
    pub role: Role,
    /// The literal message content, as typed.
    pub text: String,
    /// Compound sentiment score in [-1, 1]. Always `None` for bot replies.
    pub sentiment_score: Option<f64>,
    /// UTC instant assigned by the store when the row was written.
    pub timestamp: DateTime<Utc>,
}

/// Raw `messages` row as stored in SQLite.
#[derive(Debug, FromRow)]
pub struct MessageRow {
    pub id: i64,
    pub user: String,
    pub role: String,
    pub text: String,
    pub compound: Option<f64>,
    pub timestamp: String,
}

impl TryFrom<MessageRow> for Message {
    type Error = AppError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let timestamp = DateTime::parse_from_rfc3339(&row.timestamp)?.with_timezone(&Utc);
        Ok(Message {
            id: row.id,
            user: row.user,
            role: row.role.parse()?,
            text: row.text,
            sentiment_score: row.compound,
            timestamp,
        })
    }
}
