//! Deploy Use Case
//!
//! Publishes a freshly written data file:
//! - `git add` the data file
//! - `git commit` with a timestamped message (may fail harmlessly)
//! - `git push` to the configured remote and branch
//! - run the site build-and-publish command

mod plan;
mod result;
mod use_case;

pub use plan::{DeployPlan, PlannedStep, COMMIT_TIMESTAMP_FORMAT};
pub use result::{DeployReport, StepOutcome, StepStatus};
pub use use_case::DeployUseCase;
