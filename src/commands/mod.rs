//! Command handlers for the practice-log binary

pub mod deploy;
pub mod generate;
pub mod prompt;
pub mod scan;

use std::path::Path;

use anyhow::Result;

use practice_log::config::{self, Config, ConfigWarning};
use practice_log::domain::ports::EventSink;
use practice_log::infrastructure::{ConsoleEventSink, JsonEventSink};

/// Resolve configuration for this run and report unknown keys
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let loaded = config::resolve(explicit, &cwd)?;

    if let Some(path) = &loaded.path {
        print_config_warnings(path, &loaded.warnings);
    }

    Ok(loaded.config)
}

/// Event sink for the chosen output mode
pub fn event_sink(json: bool, verbose: u8) -> Box<dyn EventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::new(verbose))
    }
}

fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
