//! Setup orchestration.
//!
//! [`Pipeline`] runs [`SetupStep`](crate::steps::SetupStep)s in order and
//! stops at the first failure. [`local_ai_pipeline`] assembles the standard
//! version → install → model sequence from a [`SetupConfig`].

pub mod runner;
pub mod summary;

pub use runner::{Pipeline, PipelineOutcome, PipelineResult, StepRecord};
pub use summary::{show_banner, show_success, BANNER};

use std::path::Path;

use crate::config::SetupConfig;
use crate::shell::CommandRunner;
use crate::steps::{DependencyInstaller, ModelValidator, VersionGate};

/// Which optional steps to include.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Leave out the pip install step.
    pub skip_install: bool,
}

/// Build the local AI setup pipeline.
pub fn local_ai_pipeline<'a>(
    config: &SetupConfig,
    runner: &'a dyn CommandRunner,
    work_dir: &Path,
    options: PipelineOptions,
) -> Pipeline<'a> {
    let mut pipeline =
        Pipeline::new().step(VersionGate::new(runner, &config.python, config.min_python));

    if !options.skip_install {
        pipeline = pipeline.step(
            DependencyInstaller::new(runner, &config.python, &config.package)
                .with_pip_args(&config.pip_args),
        );
    }

    pipeline.step(
        ModelValidator::new(
            runner,
            &config.python,
            &config.model,
            &config.test_sentence,
            work_dir,
        )
        .verify_payload(config.verify_payload),
    )
}
