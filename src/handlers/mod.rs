/// HTTP request handlers
use crate::domain::ChannelSchedule;
use crate::errors::ApiError;
use crate::services::EpgService;
use crate::store::SnapshotStore;
use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::error;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub epg_service: Arc<EpgService>,
    pub store: Arc<SnapshotStore>,
    /// When set, `/download_epg` runs a synchronous refresh before serving.
    pub refresh_on_download: bool,
}

/// Liveness check handler
pub async fn home() -> &'static str {
    "EPG Fetcher API is running!"
}

/// Serve the snapshot file as a JSON attachment, optionally refreshing first.
pub async fn download_epg(State(state): State<AppState>) -> Result<Response, ApiError> {
    if state.refresh_on_download {
        // A failed refresh still serves the last known snapshot.
        if let Err(e) = state.epg_service.refresh().await {
            error!("On-demand EPG refresh failed: {e}");
        }
    }

    let bytes = state
        .store
        .read_bytes()
        .await?
        .ok_or(ApiError::SnapshotUnavailable)?;

    Ok((
        [
            (CONTENT_TYPE, "application/json"),
            (CONTENT_DISPOSITION, "attachment; filename=\"epg.json\""),
        ],
        bytes,
    )
        .into_response())
}

/// Return the parsed snapshot as a JSON array.
pub async fn get_epg(State(state): State<AppState>) -> Result<Json<Vec<ChannelSchedule>>, ApiError> {
    let snapshot = state
        .store
        .read()
        .await?
        .ok_or(ApiError::SnapshotUnavailable)?;
    Ok(Json(snapshot))
}
