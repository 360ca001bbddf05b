//! API error taxonomy shared across handlers
//!
//! Every failure in the request path collapses into one of these variants,
//! each with a fixed status code and a JSON body of `{error, message}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::error;

/// Errors surfaced to API clients
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing input
    #[error("{0}")]
    Validation(String),

    /// An account with the requested email already exists
    #[error("An account with that email already exists")]
    DuplicateAccount,

    /// Login failed; unknown email and wrong password are indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing, invalid, or expired bearer token
    #[error("Authentication required")]
    Unauthenticated,

    /// Valid principal, but the resource belongs to someone else
    #[error("Not authorized to access this resource")]
    Forbidden,

    /// The requested resource does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Persistence or infrastructure failure; detail is logged, not leaked
    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            ApiError::DuplicateAccount => (StatusCode::BAD_REQUEST, "duplicate_account"),
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid_credentials"),
            ApiError::Unauthenticated => (StatusCode::UNAUTHORIZED, "unauthenticated"),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "forbidden"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Internal(detail) => {
                error!("Internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let body = Json(json!({
            "error": error_code,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
