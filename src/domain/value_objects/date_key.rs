//! Date key value object - ISO date parsed from a localized folder label
//!
//! Problem folders are named like `2025年11月13日`. The key is the same date
//! rendered as `2025-11-13`, which sorts lexicographically in calendar order.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// Anchored at the start only: trailing text after `日` is tolerated.
static DATE_FOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})年([0-9]{1,2})月([0-9]{1,2})日").expect("date folder pattern is valid")
});

/// `YYYY-MM-DD` date key of a daily record
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Parse a folder name such as `2025年1月3日` into `2025-01-03`
    ///
    /// Returns `None` for names that are not date folders. Month and day are
    /// zero-padded but not range-checked.
    pub fn parse_folder_name(name: &str) -> Option<Self> {
        let caps = DATE_FOLDER.captures(name)?;
        Some(Self(format!(
            "{}-{:0>2}-{:0>2}",
            &caps[1], &caps[2], &caps[3]
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
