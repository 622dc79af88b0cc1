//! API error type shared by all request handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use herodex_registry::RegistryError;
use thiserror::Error;

/// API error type mapping to HTTP status codes.
///
/// Two client-facing kinds exist: a missing entity (`NotFound`, `{"error":
/// ...}` body) and a failed field validation (`Validation`, `{"errors":
/// [...]}` body with every violation for the request). Everything else is an
/// internal error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": message })),
            )
                .into_response(),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::InternalServerError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": message })),
            )
                .into_response(),
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::HeroNotFound(_) => ApiError::NotFound("Hero not found".to_string()),
            RegistryError::PowerNotFound(_) => ApiError::NotFound("Power not found".to_string()),
            RegistryError::Database(err) => {
                tracing::error!(error = %err, "registry operation failed");
                ApiError::InternalServerError("database error".to_string())
            }
        }
    }
}

impl ApiError {
    /// Wraps a connection-pool failure.
    pub fn pool(e: impl std::fmt::Display) -> Self {
        ApiError::InternalServerError(format!("db connection failed: {e}"))
    }

    /// Wraps a blocking-task join failure.
    pub fn join(e: impl std::fmt::Display) -> Self {
        ApiError::InternalServerError(format!("task join error: {e}"))
    }
}
