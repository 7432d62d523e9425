//! Scan Use Case
//!
//! Turns a directory of dated problem folders into daily records:
//! - Folders named like `2025年3月5日` become `2025-03-05` records
//! - Solution files inside become display titles
//! - Empty days are dropped; the rest are sorted by date

mod options;
mod use_case;

use crate::domain::entities::ScanResult;
use crate::domain::ports::NoopEventSink;
use crate::error::PracticeLogResult;
use crate::infrastructure::LocalFs;

pub use options::ScanOptions;
pub use use_case::ScanUseCase;

/// Scan a directory on the local disk without reporting progress
pub fn scan_directory(options: &ScanOptions) -> PracticeLogResult<ScanResult> {
    ScanUseCase::new(LocalFs::new()).execute(options, &NoopEventSink)
}
