//! The page frame: authentication-gated chrome wrapping every routed page.
//!
//! Three mutually exclusive branches, decided by the session fetch that
//! [`ui::AuthProvider`] runs once per mount:
//!
//! - still loading → a centered spinner and nothing else;
//! - no session → the page content alone, no chrome;
//! - authenticated → sticky header (brand, goals shortcut, notification
//!   bell, account menu), the page content, a fixed five-entry bottom
//!   navigation, and the ambient overlays (toaster, voice command,
//!   notification delivery).

use api::UserInfo;
use dioxus::prelude::*;

use ui::icons::{
    FaBrain, FaChartColumn, FaGear, FaHouse, FaLandmark, FaPiggyBank, FaRightFromBracket, FaUser,
    FaUsers, FaWallet,
};
use ui::{
    logout_and_reload, use_auth, use_toast, DropdownItem, DropdownMenu, DropdownSeparator, Icon,
    NotificationBell, NotificationSystem, Toaster, VoiceCommand,
};

use crate::Route;

/// Icons available to bottom-navigation entries. The indirection keeps
/// [`NAV_ITEMS`] a plain const array even though the icon shapes are
/// distinct zero-sized types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavIcon {
    Home,
    Wallet,
    Users,
    Landmark,
    Chart,
}

/// One bottom-navigation destination. Order in [`NAV_ITEMS`] is display order.
#[derive(Debug, Clone, Copy, PartialEq)]
struct NavItem {
    label: &'static str,
    route: Route,
    icon: NavIcon,
}

/// The five fixed bottom-navigation destinations.
const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Home",
        route: Route::Dashboard {},
        icon: NavIcon::Home,
    },
    NavItem {
        label: "Personal",
        route: Route::Personal {},
        icon: NavIcon::Wallet,
    },
    NavItem {
        label: "Groups",
        route: Route::Groups {},
        icon: NavIcon::Users,
    },
    NavItem {
        label: "Debts",
        route: Route::Debts {},
        icon: NavIcon::Landmark,
    },
    NavItem {
        label: "Reports",
        route: Route::Reports {},
        icon: NavIcon::Chart,
    },
];

/// Map a voice phrase to a destination. Unknown phrases map to nothing.
fn route_for_phrase(phrase: &str) -> Option<Route> {
    match phrase.trim().to_lowercase().as_str() {
        "home" | "dashboard" => Some(Route::Dashboard {}),
        "personal" => Some(Route::Personal {}),
        "groups" => Some(Route::Groups {}),
        "debts" => Some(Route::Debts {}),
        "reports" => Some(Route::Reports {}),
        "goals" => Some(Route::Goals {}),
        "profile" => Some(Route::Profile {}),
        "insights" => Some(Route::Insights {}),
        "settings" => Some(Route::Settings {}),
        _ => None,
    }
}

#[component]
pub fn PageFrame() -> Element {
    let auth = use_auth();
    let state = auth();

    // Session fetch still pending: spinner only.
    if state.loading {
        return rsx! {
            div {
                class: "auth-loading",
                div { class: "spinner" }
            }
        };
    }

    // No session: page content alone, no chrome.
    let Some(user) = state.user else {
        return rsx! {
            div {
                class: "app-shell",
                Outlet::<Route> {}
            }
        };
    };

    let nav = use_navigator();
    let mut toast = use_toast();

    let on_voice_command = move |phrase: String| {
        if let Some(route) = route_for_phrase(&phrase) {
            nav.push(route);
        } else {
            toast.error(format!("No destination matches \"{phrase}\""));
        }
    };

    rsx! {
        div {
            class: "app-shell",

            // Header
            header {
                class: "app-header",
                div {
                    class: "app-header-inner",
                    Link {
                        to: Route::Dashboard {},
                        class: "brand",
                        span { class: "brand-finan", "Finan" }
                        span { class: "brand-share", "Share" }
                    }

                    div {
                        class: "app-header-actions",
                        Link {
                            to: Route::Goals {},
                            class: "icon-button",
                            title: "Goals",
                            Icon { icon: FaPiggyBank, width: 20, height: 20 }
                        }

                        NotificationBell {}

                        DropdownMenu {
                            label: "My account",
                            trigger: rsx! {
                                AvatarBadge { user: user.clone() }
                            },
                            DropdownItem {
                                onclick: move |_| { nav.push(Route::Profile {}); },
                                Icon { icon: FaUser, width: 16, height: 16 }
                                span { "Profile" }
                            }
                            DropdownItem {
                                onclick: move |_| { nav.push(Route::Insights {}); },
                                Icon { icon: FaBrain, width: 16, height: 16 }
                                span { "Insights" }
                            }
                            DropdownItem {
                                onclick: move |_| { nav.push(Route::Settings {}); },
                                Icon { icon: FaGear, width: 16, height: 16 }
                                span { "Settings" }
                            }
                            DropdownSeparator {}
                            DropdownItem {
                                onclick: move |_| {
                                    spawn(async move {
                                        logout_and_reload().await;
                                    });
                                },
                                Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                                span { "Log out" }
                            }
                        }
                    }
                }
            }

            // Main content
            main {
                class: "app-main",
                Outlet::<Route> {}
            }

            // Ambient overlays
            Toaster {}
            VoiceCommand { on_command: on_voice_command }
            NotificationSystem {}

            // Bottom navigation
            BottomNav {}
        }
    }
}

/// Fixed bottom bar; the entry whose route equals the current route exactly
/// is highlighted.
#[component]
fn BottomNav() -> Element {
    let current = use_route::<Route>();

    rsx! {
        nav {
            class: "bottom-nav",
            div {
                class: "bottom-nav-inner",
                for item in NAV_ITEMS {
                    Link {
                        key: "{item.label}",
                        to: item.route,
                        class: if current == item.route { "bottom-nav-item active" } else { "bottom-nav-item" },
                        NavGlyph { icon: item.icon }
                        span { class: "bottom-nav-label", "{item.label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Home => rsx! { Icon { icon: FaHouse, width: 20, height: 20 } },
        NavIcon::Wallet => rsx! { Icon { icon: FaWallet, width: 20, height: 20 } },
        NavIcon::Users => rsx! { Icon { icon: FaUsers, width: 20, height: 20 } },
        NavIcon::Landmark => rsx! { Icon { icon: FaLandmark, width: 20, height: 20 } },
        NavIcon::Chart => rsx! { Icon { icon: FaChartColumn, width: 20, height: 20 } },
    }
}

/// Avatar circle: profile picture when set, otherwise the user's initial.
#[component]
fn AvatarBadge(user: UserInfo) -> Element {
    rsx! {
        div {
            class: "avatar",
            if let Some(ref url) = user.profile_picture_url {
                img {
                    class: "avatar-image",
                    src: "{url}",
                    alt: "Profile",
                }
            } else {
                span { class: "avatar-initial", "{user.avatar_initial()}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_shape() {
        assert_eq!(NAV_ITEMS.len(), 5);
        let labels: Vec<_> = NAV_ITEMS.iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Home", "Personal", "Groups", "Debts", "Reports"]);
    }

    #[test]
    fn test_nav_routes_are_distinct() {
        for (i, a) in NAV_ITEMS.iter().enumerate() {
            for b in &NAV_ITEMS[i + 1..] {
                assert_ne!(a.route, b.route);
            }
        }
    }

    #[test]
    fn test_exactly_one_entry_active_per_nav_route() {
        for item in NAV_ITEMS {
            let active = NAV_ITEMS.iter().filter(|i| i.route == item.route).count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn test_no_entry_active_on_header_routes() {
        for route in [Route::Goals {}, Route::Profile {}, Route::Settings {}] {
            assert!(NAV_ITEMS.iter().all(|i| i.route != route));
        }
    }

    #[test]
    fn test_route_for_phrase() {
        assert_eq!(route_for_phrase("home"), Some(Route::Dashboard {}));
        assert_eq!(route_for_phrase("Dashboard"), Some(Route::Dashboard {}));
        assert_eq!(route_for_phrase("  reports "), Some(Route::Reports {}));
        assert_eq!(route_for_phrase("goals"), Some(Route::Goals {}));
        assert_eq!(route_for_phrase("open the pod bay doors"), None);
    }
}
