//! Common error types for flashdeck

use thiserror::Error;

/// Common result type for flashdeck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the record store and the batch importer
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record serialization or deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
