mod auth_routes;
mod config;
pub mod monitor;
mod session;
pub mod storage;

use axum::Router;

pub use crate::config::CONFIG;
pub use crate::session::{get_session_from_cookie, require_capability, require_session};
pub use crate::storage::{STORE, Storage};

/// Install the global tracing subscriber. Call once at startup.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Build the auth router and start the monitoring refresher.
pub async fn init() -> types::Result<Router> {
    monitor::start();
    Ok(auth_routes::router())
}
