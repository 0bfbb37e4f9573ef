//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, NonInteractiveUI, OutputMode, ProgressSpinner, SetupTheme, SpinnerHandle,
    StatusKind, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: SetupTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            SetupTheme::new()
        } else {
            SetupTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        let line = self.theme.format_status(kind, msg);
        writeln!(self.term, "{}", line).ok();
    }

    fn raw_block(&mut self, output: &str) {
        let trimmed = output.trim_end();
        if trimmed.is_empty() {
            return;
        }
        for line in trimmed.lines() {
            let styled = self.theme.dim.apply_to(line).to_string();
            writeln!(self.term, "{}", styled).ok();
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_info() {
            writeln!(self.term, "{}", msg).ok();
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
        self.raw_block(output);
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_command_output() {
            self.raw_block(output);
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_info() {
            let header = self.theme.format_header(title);
            writeln!(self.term, "{}", header).ok();
        }
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
