//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::{load_config, ConfigOverrides, SetupConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Resolve settings for a command from the file, environment, and flags.
    fn config(&self, cli: &Cli, overrides: ConfigOverrides) -> Result<SetupConfig> {
        let overrides = ConfigOverrides {
            python: cli.python.clone(),
            ..overrides
        };
        load_config(cli.config.as_deref(), &self.project_root, &overrides)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run(args)) => self.run(cli, args.clone(), ui),
            Some(Commands::Check) => {
                let config = self.config(cli, ConfigOverrides::default())?;
                super::check::CheckCommand::new(config).execute(ui)
            }
            Some(Commands::Probe(args)) => {
                let config = self.config(
                    cli,
                    ConfigOverrides {
                        model: args.model.clone(),
                        verify_payload: args.strict.then_some(true),
                        ..Default::default()
                    },
                )?;
                super::probe::ProbeCommand::new(&self.project_root, config, args.clone())
                    .execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            // Default to run command with default args
            None => self.run(cli, RunArgs::default(), ui),
        }
    }

    fn run(&self, cli: &Cli, args: RunArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.config(
            cli,
            ConfigOverrides {
                package: args.package.clone(),
                model: args.model.clone(),
                verify_payload: args.strict.then_some(true),
                ..Default::default()
            },
        )?;
        super::run::RunCommand::new(&self.project_root, config, args).execute(ui)
    }
}
