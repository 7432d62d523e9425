//! Deploy step value object
//!
//! Deployment is a fixed sequence: stage the data file, commit it, push the
//! branch, then build and publish the site.

use serde::Serialize;

/// How a failed step affects the rest of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Report and continue (e.g. "nothing to commit")
    Soft,
    /// Report and skip the remaining steps
    Hard,
}

/// A named step of the deployment sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployStep {
    Stage,
    Commit,
    Push,
    Publish,
}

impl DeployStep {
    /// All steps in execution order
    pub const ALL: [DeployStep; 4] = [
        DeployStep::Stage,
        DeployStep::Commit,
        DeployStep::Push,
        DeployStep::Publish,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DeployStep::Stage => "stage",
            DeployStep::Commit => "commit",
            DeployStep::Push => "push",
            DeployStep::Publish => "publish",
        }
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        match self {
            DeployStep::Commit => FailurePolicy::Soft,
            DeployStep::Stage | DeployStep::Push | DeployStep::Publish => FailurePolicy::Hard,
        }
    }

    pub fn is_soft(&self) -> bool {
        self.failure_policy() == FailurePolicy::Soft
    }
}

impl std::fmt::Display for DeployStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
