//! Run command implementation.
//!
//! The `setup-local-ai run` command executes the full setup pipeline.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::SetupConfig;
use crate::error::Result;
use crate::pipeline::{local_ai_pipeline, show_banner, show_success, PipelineOptions};
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config: SetupConfig,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config: SetupConfig, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    /// Run the pipeline with the given command runner.
    pub fn execute_with(
        &self,
        runner: &dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        show_banner(ui);

        let options = PipelineOptions {
            skip_install: self.args.skip_install,
        };
        let pipeline = local_ai_pipeline(&self.config, runner, &self.project_root, options);
        let result = pipeline.run(ui);

        tracing::debug!(
            "Pipeline finished in {}ms after {} step(s)",
            result.duration.as_millis(),
            result.steps.len()
        );

        if result.success() {
            show_success(ui);
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(result.exit_code()))
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(&SystemRunner, ui)
    }
}
