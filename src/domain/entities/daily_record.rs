//! Per-date aggregation of solved problems
//!
//! A `DailyRecord` serializes to one object of the website's data array:
//!
//! ```json
//! { "date": "2025-03-05", "count": 2, "problems": [ { "title": "Two Sum", "tag": "Uncategorized" } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DateKey;

/// Ordered list of records, ascending by date
pub type ScanResult = Vec<DailyRecord>;

/// A single solved problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemEntry {
    pub title: String,
    pub tag: String,
}

impl ProblemEntry {
    pub fn new(title: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tag: tag.into(),
        }
    }
}

/// All problems found in one dated folder
///
/// `count` always equals `problems.len()`; the only way to add a problem is
/// [`DailyRecord::push`], and deserialization rejects mismatched counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDailyRecord")]
pub struct DailyRecord {
    date: DateKey,
    count: usize,
    problems: Vec<ProblemEntry>,
}

impl DailyRecord {
    /// Create an empty record for a date
    pub fn new(date: DateKey) -> Self {
        Self {
            date,
            count: 0,
            problems: Vec::new(),
        }
    }

    pub fn date(&self) -> &DateKey {
        &self.date
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn problems(&self) -> &[ProblemEntry] {
        &self.problems
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Append a problem, keeping `count` in step
    pub fn push(&mut self, entry: ProblemEntry) {
        self.problems.push(entry);
        self.count = self.problems.len();
    }

    /// Drop the record if it holds no problems
    pub fn into_non_empty(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Deserialize)]
struct RawDailyRecord {
    date: DateKey,
    count: usize,
    problems: Vec<ProblemEntry>,
}

impl TryFrom<RawDailyRecord> for DailyRecord {
    type Error = String;

    fn try_from(raw: RawDailyRecord) -> Result<Self, Self::Error> {
        if raw.count != raw.problems.len() {
            return Err(format!(
                "record {} has count {} but {} problems",
                raw.date,
                raw.count,
                raw.problems.len()
            ));
        }
        Ok(Self {
            date: raw.date,
            count: raw.count,
            problems: raw.problems,
        })
    }
}
