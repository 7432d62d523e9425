//! Pipeline Event Port
//!
//! Provides an observable interface for scan, write and deploy operations.
//! Enables console progress, NDJSON event streams, and silent library use.

use std::path::PathBuf;

use crate::domain::value_objects::DeployStep;

/// Event emitted while generating or deploying the data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// Scan of the root directory started
    ScanStarted { root: PathBuf },

    /// A date folder produced a record
    FolderScanned {
        folder: String,
        date: String,
        count: usize,
    },

    /// A folder was ignored (not a date folder, or no solutions inside)
    FolderSkipped { folder: String, reason: String },

    /// Scan could not run; the result is empty
    ScanFailed { error: String },

    /// Scan finished
    ScanCompleted { days: usize, problems: usize },

    /// Data file replaced on disk
    DataWritten { path: PathBuf, days: usize },

    /// Deployment sequence started
    DeployStarted { steps: usize },

    /// A deploy step is about to run
    StepStarted { step: DeployStep, command: String },

    /// A deploy step succeeded
    StepSucceeded { step: DeployStep },

    /// A deploy step failed; `soft` failures do not stop the sequence
    StepFailed {
        step: DeployStep,
        error: String,
        soft: bool,
    },

    /// A deploy step was not run because an earlier step failed
    StepSkipped { step: DeployStep },

    /// Deployment sequence finished
    DeployCompleted { success: bool },
}

/// Trait for receiving pipeline events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for scripts
/// - NoopEventSink: Silent operation
pub trait EventSink: Send + Sync {
    /// Handle a pipeline event
    fn on_event(&self, event: PipelineEvent);

    /// Check if this sink wants per-folder events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn on_event(&self, _event: PipelineEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
