//! Error types for the release finder service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Release Error Enum ==
/// Errors that cross the core/presenter boundary.
///
/// Per-call catalog failures never appear here; finders absorb them as
/// skipped years (see [`CatalogError`]).
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// A required API credential is missing
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ReleaseError {
    fn into_response(self) -> Response {
        let status = match &self {
            ReleaseError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            ReleaseError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ReleaseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Catalog Error Enum ==
/// Failure of a single external catalog call.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport failure, timeout or undecodable body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Unexpected status {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    /// Access token exchange failed
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Body decoded but did not have the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

// == Result Type Alias ==
/// Convenience Result type for the release finder service.
pub type Result<T> = std::result::Result<T, ReleaseError>;
