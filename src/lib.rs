//! practice-log - daily practice folders to a website data file
//!
//! Scans a directory of folders named like `2025年3月5日`, turns the solution
//! files inside into problem titles, writes the result as `data.json` for a
//! static site, and can commit, push and publish the site afterwards.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    parse_json, render_json, scan_directory, DeployPlan, DeployReport, DeployUseCase,
    ExportUseCase, ScanOptions, ScanUseCase,
};
pub use config::Config;
pub use domain::entities::{DailyRecord, ProblemEntry, ScanResult};
pub use domain::value_objects::{clean_title, DateKey, DeployStep};
pub use error::{PracticeLogError, PracticeLogResult};
