//! Deploy plan - the concrete commands for each step

use std::path::Path;

use crate::config::DeployConfig;
use crate::domain::ports::CommandSpec;
use crate::domain::value_objects::DeployStep;

/// Timestamp format used in commit messages
pub const COMMIT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One step and the command that performs it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    pub step: DeployStep,
    pub command: CommandSpec,
}

/// Ordered deploy steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    steps: Vec<PlannedStep>,
}

impl DeployPlan {
    /// Build the plan for a data file
    ///
    /// The publish step is left out when no publish command is configured.
    pub fn new(config: &DeployConfig, data_path: &Path, timestamp: &str) -> Self {
        let data_file = data_path.to_string_lossy().into_owned();
        let message = format!("{}: {}", config.commit_prefix, timestamp);

        let mut steps = vec![
            PlannedStep {
                step: DeployStep::Stage,
                command: CommandSpec::new("git", ["add".to_string(), data_file]),
            },
            PlannedStep {
                step: DeployStep::Commit,
                command: CommandSpec::new("git", ["commit".to_string(), "-m".to_string(), message]),
            },
            PlannedStep {
                step: DeployStep::Push,
                command: CommandSpec::new(
                    "git",
                    ["push", config.remote.as_str(), config.branch.as_str()],
                ),
            },
        ];

        if let Some((program, args)) = config.publish.split_first() {
            steps.push(PlannedStep {
                step: DeployStep::Publish,
                command: CommandSpec::new(program.as_str(), args.iter().map(String::as_str)),
            });
        }

        Self { steps }
    }

    /// Build the plan with the current local time in the commit message
    pub fn now(config: &DeployConfig, data_path: &Path) -> Self {
        let timestamp = chrono::Local::now()
            .format(COMMIT_TIMESTAMP_FORMAT)
            .to_string();
        Self::new(config, data_path, &timestamp)
    }

    pub fn steps(&self) -> &[PlannedStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
