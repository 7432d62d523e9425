//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PracticeLogResult;

use super::loader::{self, ConfigWarning};

/// Where and what to scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory holding the dated problem folders
    pub root: PathBuf,
    /// Extension marking a solution file, without the dot
    pub extension: String,
    /// Tag given to every problem
    pub default_tag: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: "py".to_string(),
            default_tag: "Uncategorized".to_string(),
        }
    }
}

/// Where the data file goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./public"),
            filename: "data.json".to_string(),
        }
    }
}

impl OutputConfig {
    /// Full path of the data file
    pub fn data_path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }
}

/// Version control and site publishing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    pub remote: String,
    pub branch: String,
    /// Commit message prefix; the timestamp is appended
    pub commit_prefix: String,
    /// Site build-and-publish command, program first
    pub publish: Vec<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            branch: "main".to_string(),
            commit_prefix: "Auto update data".to_string(),
            publish: vec!["npm".to_string(), "run".to_string(), "deploy".to_string()],
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub deploy: DeployConfig,
}

impl Config {
    /// Load configuration from a TOML file, ignoring unknown keys
    pub fn load(path: &Path) -> PracticeLogResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings
    pub fn load_with_warnings(path: &Path) -> PracticeLogResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}
