//! Error types for the universe store API.
//!
//! [`ApiError`] unifies the handler failure modes into a single enum
//! that converts into an Axum response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//! Error responses carry a plain reason string, never a JSON body; only
//! success responses are JSON-shaped.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested universe does not exist (or its name sanitizes to
    /// nothing, which is indistinguishable from missing).
    #[error("Universe not found")]
    NotFound,

    /// The universe name sanitizes to an empty filename on save.
    #[error("Failed to save: invalid universe name")]
    InvalidName,

    /// Writing the save file failed.
    #[error("Failed to save: {0}")]
    WriteFailed(String),

    /// An unexpected filesystem failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidName | Self::WriteFailed(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
