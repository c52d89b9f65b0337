//! Screener error types

use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScreenerError>;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Stock universe unavailable: {0}")]
    UniverseUnavailable(String),

    #[error("Invalid stock universe: {0}")]
    InvalidUniverse(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScreenerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ScreenerError::Validation(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ScreenerError::Validation(_) => StatusCode::BAD_REQUEST,
            ScreenerError::NotFound(_) => StatusCode::NOT_FOUND,
            ScreenerError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ScreenerError::Conflict(_) => StatusCode::CONFLICT,
            ScreenerError::UniverseUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand back to a client. Internal failures are not echoed.
    pub fn public_message(&self) -> String {
        match self.status_code() {
            StatusCode::INTERNAL_SERVER_ERROR => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}
