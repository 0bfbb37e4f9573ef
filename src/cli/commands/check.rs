//! Check command implementation.
//!
//! The `setup-local-ai check` command runs only the Python version gate.

use crate::config::SetupConfig;
use crate::error::Result;
use crate::shell::{CommandRunner, SystemRunner};
use crate::steps::VersionGate;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    config: SetupConfig,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config: SetupConfig) -> Self {
        Self { config }
    }

    pub fn execute_with(
        &self,
        runner: &dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let gate = VersionGate::new(runner, &self.config.python, self.config.min_python);
        match gate.check(ui) {
            Ok(_) => Ok(CommandResult::success()),
            Err(_) => Ok(CommandResult::failure(1)),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(&SystemRunner, ui)
    }
}
