//! Capture-and-report wrapper shared by the command-driven steps.

use crate::error::{Result, SetupError};
use crate::shell::{CommandResult, CommandRunner, CommandSpec};
use crate::ui::UserInterface;

/// Run `spec` with output captured and report the outcome.
///
/// Prints `<description>...` before running, then either
/// `<description> completed successfully`, or `<description> failed:`
/// followed by the captured stderr, or `<description> failed with error:`
/// when the program could not be started. Failures come back as `Err`
/// after they have been reported.
pub fn run_reported(
    runner: &dyn CommandRunner,
    spec: &CommandSpec,
    description: &str,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    let result = run_captured(runner, spec, description, ui)?;
    if result.success {
        report_success(&result, description, ui);
        Ok(result)
    } else {
        report_failure(&result, description, ui);
        Err(command_failed(spec, &result))
    }
}

/// Run `spec` with a spinner and hand back the result, whatever the exit code.
///
/// Only a spawn error is reported here; the caller decides how a finished
/// command is reported.
pub fn run_captured(
    runner: &dyn CommandRunner,
    spec: &CommandSpec,
    description: &str,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    ui.info(&format!("{}...", description));

    let mut spinner = ui.start_spinner(&spec.to_string());
    let outcome = runner.run(spec);
    spinner.finish();

    outcome.map_err(|err| {
        let reason = match &err {
            SetupError::CommandSpawn { message, .. } => message.clone(),
            other => other.to_string(),
        };
        ui.error(&format!("{} failed with error: {}", description, reason));
        err
    })
}

/// Echo captured stdout and print `<description> completed successfully`.
pub fn report_success(result: &CommandResult, description: &str, ui: &mut dyn UserInterface) {
    ui.command_output(&result.stdout);
    ui.success(&format!("{} completed successfully", description));
}

/// Print `<description> failed:` and the captured stderr.
pub fn report_failure(result: &CommandResult, description: &str, ui: &mut dyn UserInterface) {
    ui.error(&format!("{} failed:", description));
    // Probes report on stdout; fall back to it when stderr is empty.
    if result.stderr.trim().is_empty() {
        ui.error_output(&result.stdout);
    } else {
        ui.error_output(&result.stderr);
    }
}

/// The error for a command that ran and exited non-zero.
pub fn command_failed(spec: &CommandSpec, result: &CommandResult) -> SetupError {
    SetupError::CommandFailed {
        command: spec.to_string(),
        code: result.exit_code,
    }
}
