//! Login page view with email/password and registration forms.

use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

/// Login page component. Shown without chrome (the page frame renders
/// anonymous visitors bare). Toggles between sign-in and sign-up.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut registering = use_signal(|| false);
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    // Already logged in: go straight to the dashboard
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if registering() && full_name().trim().is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }

            busy.set(true);
            let result = if registering() {
                api::register(e, p, full_name().trim().to_string()).await
            } else {
                api::login_password(e, p).await
            };

            match result {
                Ok(user) => {
                    let mut state = auth();
                    state.user = Some(user);
                    state.loading = false;
                    auth.set(state);
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    busy.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-container",

            h1 {
                class: "login-brand",
                span { class: "brand-finan", "Finan" }
                span { class: "brand-share", "Share" }
            }

            p {
                class: "login-subtitle",
                if registering() {
                    "Create your account"
                } else {
                    "Sign in to manage your finances"
                }
            }

            form {
                class: "login-form",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    div { class: "login-error", "{err}" }
                }

                if registering() {
                    input {
                        class: "login-input",
                        r#type: "text",
                        placeholder: "Full name",
                        value: full_name(),
                        oninput: move |evt: FormEvent| full_name.set(evt.value()),
                    }
                }

                input {
                    class: "login-input",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "login-input",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "login-submit",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() {
                        "Please wait..."
                    } else if registering() {
                        "Create account"
                    } else {
                        "Sign in"
                    }
                }
            }

            button {
                class: "login-toggle",
                onclick: move |_| {
                    error.set(None);
                    registering.set(!registering());
                },
                if registering() {
                    "Already have an account? Sign in"
                } else {
                    "New here? Create an account"
                }
            }
        }
    }
}
