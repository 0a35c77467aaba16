//! Notification model: the `notifications` row and its client projection.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full notification record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub body: Option<String>,
    pub seen: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Notification {
    /// Convert to NotificationInfo for client consumption.
    pub fn to_info(&self) -> NotificationInfo {
        NotificationInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            body: self.body.clone(),
            seen: self.seen,
        }
    }
}

/// Notification safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationInfo {
    pub id: String,
    pub title: String,
    pub body: Option<String>,
    pub seen: bool,
}
