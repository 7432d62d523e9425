//! Scan Use Case
//!
//! Walks the root directory and turns every dated folder into a record.

use std::path::Path;

use crate::domain::entities::{DailyRecord, ProblemEntry, ScanResult};
use crate::domain::ports::{EventSink, FileSystem, PipelineEvent};
use crate::domain::value_objects::{clean_title, DateKey};
use crate::error::{PracticeLogError, PracticeLogResult};

use super::options::ScanOptions;

/// Scan use case - builds the sorted list of daily records
pub struct ScanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> ScanUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Scan the root directory
    ///
    /// Fails with `DirectoryNotFound` if the root is missing.
    pub fn execute(
        &self,
        options: &ScanOptions,
        events: &dyn EventSink,
    ) -> PracticeLogResult<ScanResult> {
        let root = options.root.as_path();
        if !self.fs.exists(root) {
            return Err(PracticeLogError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        events.on_event(PipelineEvent::ScanStarted {
            root: root.to_path_buf(),
        });

        let detailed = events.wants_detailed_events();
        let mut records = Vec::new();

        for entry in self.fs.list_dir(root)?.into_iter().filter(|e| e.is_dir()) {
            let Some(date) = DateKey::parse_folder_name(&entry.name) else {
                if detailed {
                    events.on_event(PipelineEvent::FolderSkipped {
                        folder: entry.name,
                        reason: "not a date folder".to_string(),
                    });
                }
                continue;
            };

            let record = self.scan_folder(&root.join(&entry.name), date, options)?;
            match record.into_non_empty() {
                Some(record) => {
                    if detailed {
                        events.on_event(PipelineEvent::FolderScanned {
                            folder: entry.name,
                            date: record.date().to_string(),
                            count: record.count(),
                        });
                    }
                    records.push(record);
                }
                None => {
                    if detailed {
                        events.on_event(PipelineEvent::FolderSkipped {
                            folder: entry.name,
                            reason: format!("no .{} files", options.extension),
                        });
                    }
                }
            }
        }

        // Stable: folders sharing a date keep name order
        records.sort_by(|a, b| a.date().cmp(b.date()));

        events.on_event(PipelineEvent::ScanCompleted {
            days: records.len(),
            problems: records.iter().map(DailyRecord::count).sum(),
        });

        Ok(records)
    }

    /// Scan, reporting a missing root and returning an empty result
    ///
    /// Other errors (unreadable folders) are still returned.
    pub fn execute_or_empty(
        &self,
        options: &ScanOptions,
        events: &dyn EventSink,
    ) -> PracticeLogResult<ScanResult> {
        match self.execute(options, events) {
            Err(err @ PracticeLogError::DirectoryNotFound { .. }) => {
                events.on_event(PipelineEvent::ScanFailed {
                    error: err.to_string(),
                });
                Ok(Vec::new())
            }
            other => other,
        }
    }

    fn scan_folder(
        &self,
        folder: &Path,
        date: DateKey,
        options: &ScanOptions,
    ) -> PracticeLogResult<DailyRecord> {
        let mut record = DailyRecord::new(date);

        for entry in self.fs.list_dir(folder)? {
            if entry.is_file() && options.is_solution_file(&entry.name) {
                record.push(ProblemEntry::new(
                    clean_title(&entry.name),
                    options.default_tag.as_str(),
                ));
            }
        }

        Ok(record)
    }
}
