//! Deploy result types

use crate::domain::ports::{CommandError, CommandSpec};
use crate::domain::value_objects::DeployStep;
use crate::error::{PracticeLogError, PracticeLogResult};

/// What happened to one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Succeeded,
    Failed(CommandError),
    /// Not run because an earlier hard step failed
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: DeployStep,
    pub command: CommandSpec,
    pub status: StepStatus,
}

impl StepOutcome {
    pub fn is_hard_failure(&self) -> bool {
        matches!(self.status, StepStatus::Failed(_)) && !self.step.is_soft()
    }
}

/// Result of a deploy run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployReport {
    pub outcomes: Vec<StepOutcome>,
}

impl DeployReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: StepOutcome) {
        self.outcomes.push(outcome);
    }

    /// All hard steps ran and succeeded; soft failures are tolerated
    pub fn is_success(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| !o.is_hard_failure() && o.status != StepStatus::Skipped)
    }

    pub fn status_of(&self, step: DeployStep) -> Option<&StepStatus> {
        self.outcomes
            .iter()
            .find(|o| o.step == step)
            .map(|o| &o.status)
    }

    /// The first hard failure, if any
    pub fn hard_failure(&self) -> Option<&StepOutcome> {
        self.outcomes.iter().find(|o| o.is_hard_failure())
    }

    /// Turn a failed deployment into a `CommandFailure` error
    pub fn into_result(self) -> PracticeLogResult<Self> {
        match self.hard_failure() {
            Some(StepOutcome {
                step,
                command,
                status: StepStatus::Failed(reason),
            }) => Err(PracticeLogError::CommandFailure {
                step: step.name().to_string(),
                command: command.to_string(),
                reason: reason.to_string(),
            }),
            _ => Ok(self),
        }
    }
}
