//! Deploy Use Case
//!
//! Runs the plan step by step. A soft failure (commit) is reported and the
//! sequence continues; a hard failure marks every later step skipped.

use crate::domain::ports::{CommandRunner, EventSink, PipelineEvent};

use super::plan::DeployPlan;
use super::result::{DeployReport, StepOutcome, StepStatus};

/// Deploy use case - stages, commits and pushes the data file, then publishes
pub struct DeployUseCase<R>
where
    R: CommandRunner,
{
    runner: R,
}

impl<R> DeployUseCase<R>
where
    R: CommandRunner,
{
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn execute(&self, plan: &DeployPlan, events: &dyn EventSink) -> DeployReport {
        events.on_event(PipelineEvent::DeployStarted { steps: plan.len() });

        let mut report = DeployReport::new();
        let mut halted = false;

        for planned in plan.steps() {
            let status = if halted {
                events.on_event(PipelineEvent::StepSkipped { step: planned.step });
                StepStatus::Skipped
            } else {
                events.on_event(PipelineEvent::StepStarted {
                    step: planned.step,
                    command: planned.command.to_string(),
                });

                match self.runner.run(&planned.command) {
                    Ok(()) => {
                        events.on_event(PipelineEvent::StepSucceeded { step: planned.step });
                        StepStatus::Succeeded
                    }
                    Err(err) => {
                        let soft = planned.step.is_soft();
                        events.on_event(PipelineEvent::StepFailed {
                            step: planned.step,
                            error: err.to_string(),
                            soft,
                        });
                        halted = !soft;
                        StepStatus::Failed(err)
                    }
                }
            };

            report.push(StepOutcome {
                step: planned.step,
                command: planned.command.clone(),
                status,
            });
        }

        events.on_event(PipelineEvent::DeployCompleted {
            success: report.is_success(),
        });

        report
    }
}
