//! Scan options

use std::path::PathBuf;

use crate::config::ScanConfig;

/// What to scan and how to label it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Directory holding the dated problem folders
    pub root: PathBuf,
    /// Solution file extension, without the dot
    pub extension: String,
    /// Tag given to every problem
    pub default_tag: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::from(&ScanConfig::default())
    }
}

impl From<&ScanConfig> for ScanOptions {
    fn from(config: &ScanConfig) -> Self {
        Self {
            root: config.root.clone(),
            extension: String::new(),
            default_tag: config.default_tag.clone(),
        }
        .with_extension(config.extension.as_str())
    }
}

impl ScanOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Set the solution extension; `.py`, ` py ` and `py` are the same
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim().trim_start_matches('.').to_string();
        self
    }

    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = tag.into();
        self
    }

    /// Whether a file name marks a solution (`*.py` by default)
    pub fn is_solution_file(&self, name: &str) -> bool {
        name.strip_suffix(self.extension.as_str())
            .is_some_and(|rest| rest.ends_with('.'))
    }
}
