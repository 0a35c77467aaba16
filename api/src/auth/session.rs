//! Session data types.

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";
