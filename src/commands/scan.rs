//! Scan command handler
//!
//! Prints the records to stdout; progress goes to stderr so the output can
//! be piped. With `--json` the progress is NDJSON as well.

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use practice_log::application::{render_json, ScanOptions, ScanUseCase};
use practice_log::config::Config;
use practice_log::domain::ports::EventSink;
use practice_log::infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs};

/// Execute the scan command
pub fn cmd_scan(
    root: Option<PathBuf>,
    mut config: Config,
    json: bool,
    verbose: u8,
) -> Result<()> {
    if let Some(root) = root {
        config.scan.root = root;
    }

    let sink: Box<dyn EventSink> = if json {
        Box::new(JsonEventSink::with_writer(io::stderr()))
    } else {
        Box::new(ConsoleEventSink::with_writers(io::stderr(), io::stderr(), verbose))
    };
    let records = ScanUseCase::new(LocalFs::new())
        .execute_or_empty(&ScanOptions::from(&config.scan), sink.as_ref())?;

    println!("{}", render_json(&records)?);
    Ok(())
}
