use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use distortion_core::Error as CoreError;
use serde_json::json;
use std::fmt;

/// Failures surfaced while handling a document request.
///
/// The router is total: every variant becomes a JSON error response.
/// Upstream problems (store unreachable, key missing, document invalid,
/// fetch timeout) are the 502 class; anything else is a 500.
#[derive(Debug)]
pub enum AppError {
    Store(CoreError),
    MissingTrackData(String),
    Timeout(String),
    TrackData(CoreError),
    Render(CoreError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Store(err) => write!(f, "Track store unavailable: {}", err),
            AppError::MissingTrackData(key) => {
                write!(f, "Track document '{}' not found in store", key)
            }
            AppError::Timeout(key) => {
                write!(f, "Timed out fetching track document '{}'", key)
            }
            AppError::TrackData(err) => write!(f, "Track document is invalid: {}", err),
            AppError::Render(err) => write!(f, "Failed to render page: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Store(_)
            | AppError::MissingTrackData(_)
            | AppError::Timeout(_)
            | AppError::TrackData(_) => StatusCode::BAD_GATEWAY,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!(error = %self, "request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
