//! Sequential step execution with short-circuit on failure.

use std::time::{Duration, Instant};

use crate::error::SetupError;
use crate::steps::SetupStep;
use crate::ui::UserInterface;

/// Record of one step that ran.
#[derive(Debug, Clone)]
pub struct StepRecord {
    pub name: String,
    pub success: bool,
    pub duration: Duration,
}

/// How the pipeline ended.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// Every step succeeded.
    Completed,
    /// The step at `index` failed; no later step ran.
    FailedAt {
        index: usize,
        step: String,
        error: SetupError,
    },
}

/// Result of running a pipeline.
#[derive(Debug)]
pub struct PipelineResult {
    pub outcome: PipelineOutcome,
    /// Steps that ran, in order, including the failing one.
    pub steps: Vec<StepRecord>,
    pub duration: Duration,
}

impl PipelineResult {
    pub fn success(&self) -> bool {
        matches!(self.outcome, PipelineOutcome::Completed)
    }

    /// Process exit code for this result.
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }
}

/// Runs setup steps in order, stopping at the first failure.
#[derive(Default)]
pub struct Pipeline<'a> {
    steps: Vec<Box<dyn SetupStep + 'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step.
    pub fn step(mut self, step: impl SetupStep + 'a) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run all steps. A failing step's `failure_message` is printed before
    /// returning; nothing after it runs.
    pub fn run(&self, ui: &mut dyn UserInterface) -> PipelineResult {
        let start = Instant::now();
        let mut records = Vec::with_capacity(self.steps.len());

        for (index, step) in self.steps.iter().enumerate() {
            tracing::debug!("Step {}/{}: {}", index + 1, self.steps.len(), step.name());
            let step_start = Instant::now();
            let outcome = step.run(ui);

            records.push(StepRecord {
                name: step.name().to_string(),
                success: outcome.is_ok(),
                duration: step_start.elapsed(),
            });

            if let Err(error) = outcome {
                tracing::debug!("Step '{}' failed: {}", step.name(), error);
                if let Some(msg) = step.failure_message() {
                    ui.error(&msg);
                }
                return PipelineResult {
                    outcome: PipelineOutcome::FailedAt {
                        index,
                        step: step.name().to_string(),
                        error,
                    },
                    steps: records,
                    duration: start.elapsed(),
                };
            }
        }

        PipelineResult {
            outcome: PipelineOutcome::Completed,
            steps: records,
            duration: start.elapsed(),
        }
    }
}
