//! Typed error to HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use paraverse_core::ParaverseError;
use serde_json::json;

/// Wrapper giving core errors an HTTP representation.
#[derive(Debug)]
pub struct ApiError(pub ParaverseError);

impl From<ParaverseError> for ApiError {
    fn from(err: ParaverseError) -> Self {
        Self(err)
    }
}

fn status_for(err: &ParaverseError) -> StatusCode {
    match err {
        ParaverseError::UniverseNotFound { .. } => StatusCode::NOT_FOUND,
        ParaverseError::InsufficientUniverses { .. }
        | ParaverseError::InvalidConfiguration(_)
        | ParaverseError::CapabilityUnavailable { .. } => StatusCode::BAD_REQUEST,
        ParaverseError::ModelService(_) => StatusCode::BAD_GATEWAY,
        ParaverseError::InvalidState(_)
        | ParaverseError::Serialization { .. }
        | ParaverseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
