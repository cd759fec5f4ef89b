// Error handling for the resource endpoints
// Auth-specific errors live in auth::error

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::{debug, error};

/// Main error type for the resource handlers
/// All resource handlers return Result<T, ApiError>
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request validation failed (missing/blank/malformed field)
    /// Maps to HTTP 400 Bad Request
    #[error("{0}")]
    Validation(String),

    /// Resource not found by id for the calling user
    ///
    /// Deliberately covers both "no such id" and "exists under another
    /// owner" with the same message, so callers cannot probe for ids
    /// they do not own.
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Database operation failed
    /// Maps to HTTP 500; details are logged, never sent to the client
    #[error("Server error")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Validation(msg) => debug!("Validation error: {}", msg),
            ApiError::NotFound { resource } => debug!("{} not found", resource),
            ApiError::Database(e) => error!("Database error: {:?}", e),
        }

        let body = Json(json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}
