//! Error types for stowage.

use thiserror::Error;

/// Result type alias for stowage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building packing inputs.
///
/// Geometric or weight infeasibility during packing is not an error;
/// items that cannot be placed are reported as unfitted instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid container descriptor.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// Invalid item descriptor.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Malformed input record (missing or non-numeric field).
    #[error("Invalid data format: {0}")]
    DataFormat(String),

    /// I/O failure while reading input files.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}
