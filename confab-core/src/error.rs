//! Error types for the confab core library.

use thiserror::Error;

/// Top-level error type for core data-model operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration parse failure.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, CoreError>;
