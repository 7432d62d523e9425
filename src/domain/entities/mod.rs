//! Domain Entities
//!
//! - `DailyRecord` - all problems solved on one date
//! - `ProblemEntry` - a single solved problem

mod daily_record;

pub use daily_record::{DailyRecord, ProblemEntry, ScanResult};
