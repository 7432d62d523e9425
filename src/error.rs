//! Error types for practice-log
//!
//! Library code returns `PracticeLogError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for practice-log operations
pub type PracticeLogResult<T> = Result<T, PracticeLogError>;

/// Main error type for practice-log operations
#[derive(Error, Debug)]
pub enum PracticeLogError {
    /// Root directory to scan does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Output directory could not be created
    #[error("cannot create output directory {path}: {source}")]
    DirectoryCreateFailure {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Data file could not be written
    #[error("failed to write {path}: {source}")]
    FileWriteFailure {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// External command exited non-zero or could not be spawned
    #[error("{step} step failed (`{command}`): {reason}")]
    CommandFailure {
        step: String,
        command: String,
        reason: String,
    },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// File system error outside of the cases above
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
