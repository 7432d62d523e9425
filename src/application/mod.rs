//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT contain parsing rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ScanUseCase` - Directory tree to sorted daily records
//! - `ExportUseCase` - Daily records to the JSON data file
//! - `DeployUseCase` - Commit, push and publish the data file

pub mod deploy;
pub mod export;
pub mod scan;

pub use deploy::{DeployPlan, DeployReport, DeployUseCase, StepOutcome, StepStatus};
pub use export::{parse_json, render_json, ExportUseCase};
pub use scan::{scan_directory, ScanOptions, ScanUseCase};
