//! Routed page views. Page bodies are out of scope for the shell; each view
//! renders a titled placeholder so every destination resolves.

use dioxus::prelude::*;
use ui::use_auth;

#[component]
fn PagePlaceholder(title: &'static str, description: &'static str) -> Element {
    rsx! {
        section {
            class: "page",
            h1 { class: "page-title", "{title}" }
            p { class: "page-description", "{description}" }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let greeting = auth()
        .user
        .map(|u| format!("Welcome back, {}", u.display_name()))
        .unwrap_or_else(|| "Welcome to FinanShare".to_string());

    rsx! {
        section {
            class: "page",
            h1 { class: "page-title", "{greeting}" }
            p { class: "page-description", "Your shared finances at a glance." }
        }
    }
}

#[component]
pub fn Personal() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Personal",
            description: "Your personal income and expenses.",
        }
    }
}

#[component]
pub fn Groups() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Groups",
            description: "Expenses shared with your groups.",
        }
    }
}

#[component]
pub fn Debts() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Debts",
            description: "Who owes whom, settled in one place.",
        }
    }
}

#[component]
pub fn Reports() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Reports",
            description: "Spending broken down over time.",
        }
    }
}

#[component]
pub fn Goals() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Goals",
            description: "Savings goals and progress.",
        }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Profile",
            description: "Your account details.",
        }
    }
}

#[component]
pub fn Insights() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Insights",
            description: "Patterns and suggestions from your activity.",
        }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Settings",
            description: "Preferences and notifications.",
        }
    }
}
