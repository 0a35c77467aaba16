use dioxus::prelude::*;

use ui::{AuthProvider, NotificationsProvider, ToastProvider};
use views::{
    Dashboard, Debts, Goals, Groups, Insights, Login, PageFrame, Personal, Profile, Reports,
    Settings,
};

mod views;

#[derive(Debug, Clone, Copy, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PageFrame)]
        #[route("/")]
        Dashboard {},
        #[route("/personal")]
        Personal {},
        #[route("/groups")]
        Groups {},
        #[route("/debts")]
        Debts {},
        #[route("/reports")]
        Reports {},
        #[route("/goals")]
        Goals {},
        #[route("/profile")]
        Profile {},
        #[route("/insights")]
        Insights {},
        #[route("/settings")]
        Settings {},
        #[route("/login")]
        Login {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store
    let session_store = PostgresStore::new(pool.clone());

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                NotificationsProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}
