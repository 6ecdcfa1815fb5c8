/// Application routes configuration
use crate::handlers::{download_epg, get_epg, home, AppState};
use axum::{routing::get, Router};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(home))
        // Snapshot file as attachment
        .route("/download_epg", get(download_epg))
        // Parsed snapshot
        .route("/epg", get(get_epg))
        .with_state(state)
}
