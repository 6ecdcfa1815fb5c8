/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error response body served to HTTP clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, DNS, timeout or body-decode failure reaching the upstream API.
    #[error("upstream request failed: {0}")]
    UpstreamTransport(#[from] reqwest::Error),
    /// Upstream answered with a non-2xx status.
    #[error("upstream returned HTTP {0}")]
    UpstreamHttp(u16),
    /// No snapshot file has been written yet.
    #[error("no EPG data found")]
    SnapshotUnavailable,
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::SnapshotUnavailable => StatusCode::NOT_FOUND,
            ApiError::UpstreamTransport(_) | ApiError::UpstreamHttp(_) => StatusCode::BAD_GATEWAY,
            ApiError::Io(_) | ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            status: "error",
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
