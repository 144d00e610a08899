//! Unified error type for the fleet desk.
//!
//! Filter and eligibility inputs never fail; they degrade to defaults. The
//! variants below only cover configuration, storage and serving failures, which
//! the web layer renders through its error boundary.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed configuration (environment or seed file)
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what was wrong
        message: String,
    },

    /// Any failure reported by the persistence layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure, e.g. binding the listener
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP server stopped with an error
    #[error("Server error: {message}")]
    Serve {
        /// Description of the failure
        message: String,
    },
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
