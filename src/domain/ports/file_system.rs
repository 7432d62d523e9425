//! FileSystem port - abstraction over file I/O operations
//!
//! This trait lets the scanner and writer work against the local disk or an
//! in-memory fake without depending on a concrete implementation.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File or directory not found
    #[error("not found: {0}")]
    NotFound(PathBuf),
    /// Permission denied
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),
    /// Any other I/O error
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Attach the offending path to an I/O error
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// What a directory entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    Other,
}

/// A single entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - in-memory fakes in tests
pub trait FileSystem {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// List the immediate entries of a directory, sorted by name
    ///
    /// Entries whose names are not valid UTF-8 are left out.
    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>>;

    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Replace a file's content atomically
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;
}
