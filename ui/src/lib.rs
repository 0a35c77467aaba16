//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{logout_and_reload, use_auth, AuthBranch, AuthProvider, AuthState};

mod toast;
pub use toast::{use_toast, Toast, ToastHandle, ToastLevel, ToastProvider, Toaster};

mod notifications;
pub use notifications::{
    unseen_count, use_notifications, NotificationBell, NotificationSystem, NotificationsProvider,
};

mod dropdown;
pub use dropdown::{DropdownItem, DropdownMenu, DropdownSeparator};

mod voice_command;
pub use voice_command::VoiceCommand;
