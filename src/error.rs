//! Domain error types for snippick
//!
//! Provides structured error types:
//! - `ClipboardError` for clipboard operations
//! - `SnippickError` as the top-level error type

use thiserror::Error;

/// Top-level error type for snippick
#[derive(Debug, Error)]
pub enum SnippickError {
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors related to clipboard access
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write clipboard: {0}")]
    WriteFailed(String),
}

/// Result type alias for SnippickError
pub type Result<T> = std::result::Result<T, SnippickError>;

/// Result type alias for ClipboardError
pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

impl From<anyhow::Error> for SnippickError {
    fn from(err: anyhow::Error) -> Self {
        SnippickError::Other(err.to_string())
    }
}
