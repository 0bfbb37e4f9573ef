//! Probe command implementation.
//!
//! The `setup-local-ai probe` command downloads and tests the embedding
//! model without touching installed packages.

use std::path::{Path, PathBuf};

use crate::cli::args::ProbeArgs;
use crate::config::SetupConfig;
use crate::error::Result;
use crate::shell::{CommandRunner, SystemRunner};
use crate::steps::ModelValidator;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The probe command implementation.
pub struct ProbeCommand {
    project_root: PathBuf,
    config: SetupConfig,
    args: ProbeArgs,
}

impl ProbeCommand {
    /// Create a new probe command.
    pub fn new(project_root: &Path, config: SetupConfig, args: ProbeArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    pub fn execute_with(
        &self,
        runner: &dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let validator = ModelValidator::new(
            runner,
            &self.config.python,
            &self.config.model,
            &self.config.test_sentence,
            &self.project_root,
        )
        .verify_payload(self.config.verify_payload);

        let payload = match validator.validate(ui) {
            Ok(payload) => payload,
            Err(_) => {
                ui.error("Failed to download embedding model");
                return Ok(CommandResult::failure(1));
            }
        };

        if self.args.json {
            if let Some(payload) = &payload {
                let json = serde_json::to_string_pretty(payload)
                    .map_err(|e| anyhow::anyhow!("Failed to encode probe result: {}", e))?;
                println!("{}", json);
            }
        }

        Ok(CommandResult::success())
    }
}

impl Command for ProbeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(&SystemRunner, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedRunner;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn probe_runs_only_the_model_step() {
        let temp = TempDir::new().unwrap();
        let runner = ScriptedRunner::new(|_| {
            ScriptedRunner::ok("{\"status\": \"ready\", \"dimension\": 384}\n")
        });
        let mut ui = MockUI::new();

        let result = ProbeCommand::new(temp.path(), SetupConfig::default(), ProbeArgs::default())
            .execute_with(&runner, &mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(runner.calls().len(), 1);
        assert!(!runner.ran_with_arg("--version"));
        assert!(!runner.ran_with_arg("pip"));
    }

    #[test]
    fn failed_probe_exits_one() {
        let temp = TempDir::new().unwrap();
        let runner = ScriptedRunner::new(|_| ScriptedRunner::fail(2, "no module"));
        let mut ui = MockUI::new();

        let result = ProbeCommand::new(temp.path(), SetupConfig::default(), ProbeArgs::default())
            .execute_with(&runner, &mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Failed to download embedding model"));
    }
}
