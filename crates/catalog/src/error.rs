//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while reading or decoding a movie snapshot
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a snapshot file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Snapshot payload is not valid JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Payload decoded but is not a recognized snapshot shape
    #[error("Malformed snapshot in {path}: {reason}")]
    Malformed { path: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
