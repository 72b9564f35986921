//! Error types for the logging subsystem.

use std::io;
use std::path::PathBuf;

/// Result type for logger operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while logging or mutating configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A severity name was not recognized by the level registry.
    #[error("unrecognized log level: {0}")]
    InvalidLevel(String),

    /// Failed to create a log directory.
    #[error("failed to create log directory at {path}: {source}")]
    CreateDirectory {
        /// The path that failed to be created.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
