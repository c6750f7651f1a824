//! HTTP error types for the navdeck server.
//!
//! Maps domain errors from `navdeck-core` into HTTP responses. Every error
//! produces a JSON body with a machine-readable `error` field and a
//! human-readable `message`. Storage and serialization failures surface
//! their raw message in the 500 body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use navdeck_core::error::BoardError;

/// Application-level error returned from HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Admin token missing or wrong. Fixed message, no detail.
    Forbidden,
    /// Referenced identity absent.
    NotFound(String),
    /// Client sent invalid input (missing id, non-array ids, ...).
    BadRequest(String),
    /// Storage or serialization failure.
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "forbidden",
                "invalid admin token".to_owned(),
            ),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorBody {
            error: error_type,
            message,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<BoardError> for AppError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::NotFound { .. } => Self::NotFound(err.to_string()),
            BoardError::Encode { .. } | BoardError::Storage(_) => Self::Internal(err.to_string()),
        }
    }
}
