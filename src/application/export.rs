//! Export Use Case
//!
//! Writes the scan result as the website's `data.json`: 2-space indented,
//! non-ASCII kept literal, records in scan order.

use std::path::PathBuf;

use crate::config::OutputConfig;
use crate::domain::entities::{DailyRecord, ScanResult};
use crate::domain::ports::{EventSink, FileSystem, PipelineEvent};
use crate::error::{PracticeLogError, PracticeLogResult};

/// Render records as the data file content
pub fn render_json(records: &[DailyRecord]) -> PracticeLogResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parse a data file back into records
pub fn parse_json(content: &str) -> PracticeLogResult<ScanResult> {
    Ok(serde_json::from_str(content)?)
}

/// Export use case - replaces the data file on disk
pub struct ExportUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> ExportUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Create the output directory if needed and write the data file
    ///
    /// Returns the path written.
    pub fn execute(
        &self,
        records: &[DailyRecord],
        output: &OutputConfig,
        events: &dyn EventSink,
    ) -> PracticeLogResult<PathBuf> {
        self.fs
            .create_dir_all(&output.dir)
            .map_err(|source| PracticeLogError::DirectoryCreateFailure {
                path: output.dir.clone(),
                source,
            })?;

        let path = output.data_path();
        let content = render_json(records)?;
        self.fs
            .write(&path, &content)
            .map_err(|source| PracticeLogError::FileWriteFailure {
                path: path.clone(),
                source,
            })?;

        events.on_event(PipelineEvent::DataWritten {
            path: path.clone(),
            days: records.len(),
        });

        Ok(path)
    }
}
