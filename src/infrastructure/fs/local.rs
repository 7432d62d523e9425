//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{DirEntry, EntryKind, FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the target directory and a rename, so
/// readers never see a half-written data file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let read_dir = std::fs::read_dir(path).map_err(|e| FsError::from_io(path, e))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| FsError::from_io(path, e))?;
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };

            // Follow symlinks, like `Path::is_dir`
            let full = entry.path();
            let kind = if full.is_dir() {
                EntryKind::Dir
            } else if full.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };

            entries.push(DirEntry { name, kind });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| FsError::from_io(dir, e))?;
        tmp.write_all(content.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| FsError::from_io(tmp.path(), e))?;
        tmp.persist(path)
            .map_err(|e| FsError::from_io(path, e.error))?;

        Ok(())
    }
}
