//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Which of the three mutually exclusive page-frame branches to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthBranch {
    Loading,
    Anonymous,
    Authenticated,
}

impl AuthState {
    /// Select the render branch. `loading` wins over everything; once the
    /// session fetch has settled, the presence of a user decides.
    pub fn branch(&self) -> AuthBranch {
        if self.loading {
            AuthBranch::Loading
        } else if self.user.is_some() {
            AuthBranch::Authenticated
        } else {
            AuthBranch::Anonymous
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the session fetch settles.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap the app with this component to enable authentication.
///
/// The session fetch runs once per mount inside `use_resource`; the framework
/// drops the future if the provider unmounts first, so a late resolution can
/// never write state after teardown. There is no retry and no polling — a
/// failed fetch settles the state as anonymous.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount (exactly once)
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(user) => {
                auth_state.set(AuthState {
                    user,
                    loading: false,
                });
            }
            Err(e) => {
                tracing::debug!("Session fetch failed, continuing anonymous: {e}");
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Log out the current user and force a full page reload.
///
/// The reload is the synchronization mechanism: it remounts the app and
/// re-runs the session fetch, so no optimistic state update is needed. The
/// reload is issued even if the logout call fails.
pub async fn logout_and_reload() {
    if let Err(e) = api::logout().await {
        tracing::error!("Logout failed: {e}");
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_user() -> UserInfo {
        UserInfo {
            id: "1".to_string(),
            email: "maria@example.com".to_string(),
            full_name: Some("Maria".to_string()),
            profile_picture_url: None,
        }
    }

    #[test]
    fn test_default_state_is_loading() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(state.user.is_none());
        assert_eq!(state.branch(), AuthBranch::Loading);
    }

    #[test]
    fn test_loading_wins_even_with_user() {
        let state = AuthState {
            user: Some(some_user()),
            loading: true,
        };
        assert_eq!(state.branch(), AuthBranch::Loading);
    }

    #[test]
    fn test_settled_branches_are_exclusive() {
        let anonymous = AuthState {
            user: None,
            loading: false,
        };
        assert_eq!(anonymous.branch(), AuthBranch::Anonymous);

        let authenticated = AuthState {
            user: Some(some_user()),
            loading: false,
        };
        assert_eq!(authenticated.branch(), AuthBranch::Authenticated);
    }
}
