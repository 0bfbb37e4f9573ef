//! Package installation through pip.

use crate::error::{Result, SetupError};
use crate::shell::{CommandRunner, CommandSpec};
use crate::ui::UserInterface;

use super::report::run_reported;
use super::SetupStep;

/// Installs one package into the interpreter with `python -m pip`.
pub struct DependencyInstaller<'a> {
    runner: &'a dyn CommandRunner,
    python: String,
    package: String,
    pip_args: Vec<String>,
}

impl<'a> DependencyInstaller<'a> {
    pub fn new(runner: &'a dyn CommandRunner, python: &str, package: &str) -> Self {
        Self {
            runner,
            python: python.to_string(),
            package: package.to_string(),
            pip_args: Vec::new(),
        }
    }

    /// Extra `pip install` arguments, placed before the package name.
    pub fn with_pip_args(mut self, args: &[String]) -> Self {
        self.pip_args = args.to_vec();
        self
    }

    /// The command this step runs.
    pub fn command(&self) -> CommandSpec {
        CommandSpec::new(&self.python)
            .args(["-m", "pip", "install"])
            .args(self.pip_args.iter().cloned())
            .arg(&self.package)
    }
}

impl SetupStep for DependencyInstaller<'_> {
    fn name(&self) -> &str {
        "install"
    }

    fn failure_message(&self) -> Option<String> {
        Some(format!("Failed to install {}", self.package))
    }

    fn run(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let description = format!("Installing {}", self.package);
        run_reported(self.runner, &self.command(), &description, ui)
            .map(|_| ())
            .map_err(|e| SetupError::InstallFailed {
                package: self.package.clone(),
                message: e.to_string(),
            })
    }
}
