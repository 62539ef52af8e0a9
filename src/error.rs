//! Unified error types for the demo service.
//!
//! The only failure modes are at startup: configuration cannot be read from
//! the environment, or the listener cannot bind. Request handlers are
//! infallible and unmatched routes fall through to axum's default 404.

use thiserror::Error;

/// Unified error type for the demo service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Listener bind or other IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
