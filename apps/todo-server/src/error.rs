//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Machine-readable error codes returned in error bodies.
pub mod error_codes {
    pub const INVALID_REQUEST: &str = "invalid_request";
    pub const RESOURCE_NOT_FOUND: &str = "resource_not_found";
    pub const INTERNAL_ERROR: &str = "internal_error";
}

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store error.
    #[error("Store error: {0}")]
    Store(#[from] task_store::TaskStoreError),
}

impl ServerError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_REQUEST)
            }
            ServerError::NotFound(_) => (StatusCode::NOT_FOUND, error_codes::RESOURCE_NOT_FOUND),
            ServerError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();
        let message = match &self {
            ServerError::InvalidRequest(msg) | ServerError::NotFound(msg) => msg.clone(),
            ServerError::Store(e) => {
                tracing::error!(error = %e, "Store operation failed");
                e.to_string()
            }
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
