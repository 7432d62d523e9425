//! JSON Event Sink
//!
//! Outputs pipeline events as NDJSON for scripts and CI.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{EventSink, PipelineEvent};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Render an event as a single JSON object
pub fn event_to_json(event: &PipelineEvent) -> serde_json::Value {
    match event {
        PipelineEvent::ScanStarted { root } => serde_json::json!({
            "event": "scan_start",
            "root": root.display().to_string(),
        }),

        PipelineEvent::FolderScanned {
            folder,
            date,
            count,
        } => serde_json::json!({
            "event": "folder_scanned",
            "folder": folder,
            "date": date,
            "count": count,
        }),

        PipelineEvent::FolderSkipped { folder, reason } => serde_json::json!({
            "event": "folder_skipped",
            "folder": folder,
            "reason": reason,
        }),

        PipelineEvent::ScanFailed { error } => serde_json::json!({
            "event": "scan_failed",
            "error": error,
        }),

        PipelineEvent::ScanCompleted { days, problems } => serde_json::json!({
            "event": "scan_complete",
            "days": days,
            "problems": problems,
        }),

        PipelineEvent::DataWritten { path, days } => serde_json::json!({
            "event": "data_written",
            "path": path.display().to_string(),
            "days": days,
        }),

        PipelineEvent::DeployStarted { steps } => serde_json::json!({
            "event": "deploy_start",
            "steps": steps,
        }),

        PipelineEvent::StepStarted { step, command } => serde_json::json!({
            "event": "step_start",
            "step": step.name(),
            "command": command,
        }),

        PipelineEvent::StepSucceeded { step } => serde_json::json!({
            "event": "step_ok",
            "step": step.name(),
        }),

        PipelineEvent::StepFailed { step, error, soft } => serde_json::json!({
            "event": "step_failed",
            "step": step.name(),
            "error": error,
            "soft": soft,
        }),

        PipelineEvent::StepSkipped { step } => serde_json::json!({
            "event": "step_skipped",
            "step": step.name(),
        }),

        PipelineEvent::DeployCompleted { success } => serde_json::json!({
            "event": "deploy_complete",
            "success": success,
        }),
    }
}

impl EventSink for JsonEventSink {
    fn on_event(&self, event: PipelineEvent) {
        self.write_event(event_to_json(&event));
    }
}
