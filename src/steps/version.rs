//! Interpreter version gate.

use crate::error::{Result, SetupError};
use crate::runtime::{MinimumVersion, PythonVersion};
use crate::shell::{CommandRunner, CommandSpec};
use crate::ui::UserInterface;

use super::SetupStep;

/// Checks that the interpreter meets the minimum version.
pub struct VersionGate<'a> {
    runner: &'a dyn CommandRunner,
    python: String,
    minimum: MinimumVersion,
}

impl<'a> VersionGate<'a> {
    pub fn new(runner: &'a dyn CommandRunner, python: &str, minimum: MinimumVersion) -> Self {
        Self {
            runner,
            python: python.to_string(),
            minimum,
        }
    }

    /// Ask the interpreter for its version.
    pub fn detect(&self) -> Result<PythonVersion> {
        let spec = CommandSpec::new(&self.python).arg("--version");
        let undetected = |message: String| SetupError::RuntimeUndetected {
            interpreter: self.python.clone(),
            message,
        };

        let result = self.runner.run(&spec).map_err(|e| match e {
            SetupError::CommandSpawn { message, .. } => undetected(message),
            other => undetected(other.to_string()),
        })?;

        if !result.success {
            return Err(undetected(format!(
                "'{}' exited with code {:?}",
                spec, result.exit_code
            )));
        }

        // Python 2 and early 3.x print the version on stderr.
        PythonVersion::parse_output(&result.stdout)
            .or_else(|| PythonVersion::parse_output(&result.stderr))
            .ok_or_else(|| {
                let shown = format!("{}{}", result.stdout, result.stderr);
                undetected(format!("unrecognized output '{}'", shown.trim()))
            })
    }

    /// Check the interpreter and report the verdict.
    pub fn check(&self, ui: &mut dyn UserInterface) -> Result<PythonVersion> {
        let version = match self.detect() {
            Ok(version) => version,
            Err(err) => {
                let reason = match &err {
                    SetupError::RuntimeUndetected { message, .. } => message.clone(),
                    other => other.to_string(),
                };
                ui.error(&format!("Could not determine Python version: {}", reason));
                return Err(err);
            }
        };

        if version.satisfies(&self.minimum) {
            ui.success(&format!("Python {} is compatible", version));
            Ok(version)
        } else {
            let err = SetupError::IncompatibleRuntime {
                found: version.to_string(),
                required: self.minimum.to_string(),
            };
            ui.error(&err.to_string());
            Err(err)
        }
    }
}

impl SetupStep for VersionGate<'_> {
    fn name(&self) -> &str {
        "version"
    }

    fn failure_message(&self) -> Option<String> {
        None
    }

    fn run(&self, ui: &mut dyn UserInterface) -> Result<()> {
        self.check(ui).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedRunner;
    use crate::ui::MockUI;

    fn reporting(stdout: &'static str) -> ScriptedRunner {
        ScriptedRunner::new(move |_| ScriptedRunner::ok(stdout))
    }

    #[test]
    fn compatible_version_passes() {
        let runner = reporting("Python 3.9.0\n");
        let gate = VersionGate::new(&runner, "python", MinimumVersion::default());
        let mut ui = MockUI::new();

        let version = gate.check(&mut ui).unwrap();

        assert_eq!(version, PythonVersion::new(3, 9, 0));
        assert_eq!(ui.successes(), ["Python 3.9.0 is compatible"]);
        assert_eq!(runner.calls()[0].to_string(), "python --version");
    }

    #[test]
    fn old_version_fails_with_requirement() {
        let runner = reporting("Python 3.7.5\n");
        let gate = VersionGate::new(&runner, "python", MinimumVersion::default());
        let mut ui = MockUI::new();

        let err = gate.check(&mut ui).unwrap_err();

        assert!(matches!(err, SetupError::IncompatibleRuntime { .. }));
        assert_eq!(
            ui.errors(),
            ["Python 3.7.5 is not compatible. Need Python 3.8+"]
        );
    }

    #[test]
    fn version_on_stderr_is_read() {
        let runner = ScriptedRunner::new(|_| {
            Ok(crate::shell::CommandResult::success(
                String::new(),
                "Python 2.7.18\n".into(),
                std::time::Duration::ZERO,
            ))
        });
        let gate = VersionGate::new(&runner, "python2", MinimumVersion::default());

        assert_eq!(gate.detect().unwrap(), PythonVersion::new(2, 7, 18));
    }

    #[test]
    fn missing_interpreter_reports_cause() {
        let runner = ScriptedRunner::new(|spec| ScriptedRunner::spawn_error(spec, "not found"));
        let gate = VersionGate::new(&runner, "python", MinimumVersion::default());
        let mut ui = MockUI::new();

        let err = gate.check(&mut ui).unwrap_err();

        assert!(matches!(err, SetupError::RuntimeUndetected { .. }));
        assert_eq!(ui.errors(), ["Could not determine Python version: not found"]);
    }

    #[test]
    fn unparseable_output_fails() {
        let runner = reporting("definitely not python\n");
        let gate = VersionGate::new(&runner, "python", MinimumVersion::default());

        assert!(gate.detect().is_err());
    }

    #[test]
    fn nonzero_exit_fails() {
        let runner = ScriptedRunner::new(|_| ScriptedRunner::fail(9009, ""));
        let gate = VersionGate::new(&runner, "python", MinimumVersion::default());

        assert!(gate.detect().is_err());
    }

    #[test]
    fn custom_minimum_is_enforced() {
        let runner = reporting("Python 3.9.7\n");
        let gate = VersionGate::new(&runner, "python", MinimumVersion::new(3, 10));
        let mut ui = MockUI::new();

        assert!(gate.run(&mut ui).is_err());
        assert!(ui.has_error("Need Python 3.10+"));
    }
}
