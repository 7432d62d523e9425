//! Console Event Sink
//!
//! Human-readable progress lines. Per-folder and per-step detail only shows
//! with `-v`; failures go to stderr.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{EventSink, PipelineEvent};

pub struct ConsoleEventSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    verbose: u8,
}

impl ConsoleEventSink {
    /// Console sink on stdout/stderr
    pub fn new(verbose: u8) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), verbose)
    }

    pub fn with_writers<O, E>(out: O, err: E, verbose: u8) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            verbose,
        }
    }

    fn say(&self, line: String) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }

    fn warn(&self, line: String) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{}", line);
            let _ = err.flush();
        }
    }
}

impl EventSink for ConsoleEventSink {
    fn on_event(&self, event: PipelineEvent) {
        match event {
            PipelineEvent::ScanStarted { root } => {
                let shown = std::path::absolute(&root).unwrap_or(root);
                self.say(format!("🔍 Scanning: {} ...", shown.display()));
            }
            PipelineEvent::FolderScanned {
                folder,
                date,
                count,
            } => {
                if self.verbose > 0 {
                    self.say(format!("  ✓ {} → {} ({} problems)", folder, date, count));
                }
            }
            PipelineEvent::FolderSkipped { folder, reason } => {
                if self.verbose > 0 {
                    self.say(format!("  · {}: {}", folder, reason));
                }
            }
            PipelineEvent::ScanFailed { error } => {
                self.warn(format!("❌ Error: {}", error));
            }
            PipelineEvent::ScanCompleted { days, problems } => {
                self.say(format!("📅 Found {} days, {} problems.", days, problems));
            }
            PipelineEvent::DataWritten { path, .. } => {
                self.say(format!("✅ Data file updated: {}", path.display()));
            }
            PipelineEvent::DeployStarted { .. } => {
                self.say("\n🚀 Starting deployment...".to_string());
            }
            PipelineEvent::StepStarted { command, .. } => {
                self.say(format!("👉 Running: {}", command));
            }
            PipelineEvent::StepSucceeded { step } => {
                if self.verbose > 0 {
                    self.say(format!("  ✓ {}", step));
                }
            }
            PipelineEvent::StepFailed { step, error, soft } => {
                if soft {
                    self.warn(format!("⚠ {} failed ({}), continuing", step, error));
                } else {
                    self.warn(format!("❌ {} failed: {}", step, error));
                }
            }
            PipelineEvent::StepSkipped { step } => {
                if self.verbose > 0 {
                    self.say(format!("  ⏭ {} skipped", step));
                }
            }
            PipelineEvent::DeployCompleted { success } => {
                if success {
                    self.say(
                        "\n✅ Deployment succeeded. Refresh the site in a few minutes to see the new data."
                            .to_string(),
                    );
                } else {
                    self.warn("\n❌ Deployment failed, check the errors above.".to_string());
                }
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose > 0
    }
}
