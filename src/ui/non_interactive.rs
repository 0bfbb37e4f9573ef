//! Non-interactive UI for CI/headless environments.

use super::spinner::NoopSpinner;
use super::theme::{SetupTheme, StatusKind};
use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for pipes, CI logs, and `--no-color` runs.
///
/// Every line goes to stdout with a plain `[TAG]` prefix, errors included,
/// so a captured log reads in order.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: SetupTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: SetupTheme::plain(),
        }
    }

    fn status(&self, kind: StatusKind, msg: &str) {
        println!("{}", self.theme.format_status(kind, msg));
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_info() {
            println!("{}", msg);
        }
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_info() {
            self.status(StatusKind::Info, msg);
        }
    }

    fn success(&mut self, msg: &str) {
        self.status(StatusKind::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.status(StatusKind::Warning, msg);
    }

    fn error(&mut self, msg: &str) {
        self.status(StatusKind::Error, msg);
    }

    fn error_output(&mut self, output: &str) {
        let trimmed = output.trim_end();
        if !trimmed.is_empty() {
            println!("{}", trimmed);
        }
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_command_output() {
            let trimmed = output.trim_end();
            if !trimmed.is_empty() {
                println!("{}", trimmed);
            }
        }
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_info() {
            println!("{}", self.theme.format_header(title));
        }
    }
}
