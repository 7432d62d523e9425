//! Configuration module for practice-log
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PRACTICE_LOG_*)
//! 3. Config file (`--config`, `./practice-log.toml`, or
//!    `<config dir>/practice-log/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, load_with_warnings, resolve, with_env_overrides, ConfigWarning,
    LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{Config, DeployConfig, OutputConfig, ScanConfig};
