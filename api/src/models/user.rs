//! # User model
//!
//! Two representations of a FinanShare user:
//!
//! - [`User`] (server only) — the complete `users` row, loaded via
//!   [`sqlx::FromRow`]. Carries the UUID primary key, email, profile fields,
//!   the Argon2 password hash, and audit timestamps. [`User::to_info`]
//!   projects it into the client-safe form.
//! - [`UserInfo`] — the subset that crosses the server/client boundary via
//!   Dioxus server functions. Omits the password hash and timestamps and
//!   carries the id as a `String` so it works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub profile_picture_url: Option<String>,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            profile_picture_url: self.profile_picture_url.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub profile_picture_url: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if the name is not set.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }

    /// Initial shown in the avatar circle when no profile picture is set:
    /// the uppercased first character of the full name, or "U" when the
    /// name is absent or empty.
    pub fn avatar_initial(&self) -> String {
        self.full_name
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(full_name: Option<&str>) -> UserInfo {
        UserInfo {
            id: "00000000-0000-0000-0000-000000000000".to_string(),
            email: "maria@example.com".to_string(),
            full_name: full_name.map(String::from),
            profile_picture_url: None,
        }
    }

    #[test]
    fn test_avatar_initial_from_name() {
        assert_eq!(user(Some("maria silva")).avatar_initial(), "M");
        assert_eq!(user(Some("Bruno")).avatar_initial(), "B");
    }

    #[test]
    fn test_avatar_initial_fallback() {
        assert_eq!(user(None).avatar_initial(), "U");
        assert_eq!(user(Some("")).avatar_initial(), "U");
    }

    #[test]
    fn test_avatar_initial_multibyte() {
        // Uppercasing a multibyte character must not panic or truncate.
        assert_eq!(user(Some("élodie")).avatar_initial(), "É");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(user(None).display_name(), "maria@example.com");
        assert_eq!(user(Some("Maria")).display_name(), "Maria");
    }
}
