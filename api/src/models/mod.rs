//! Data models for the application.

mod notification;
mod user;

#[cfg(feature = "server")]
pub use notification::Notification;
pub use notification::NotificationInfo;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
