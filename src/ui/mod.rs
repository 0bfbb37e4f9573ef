//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! Every status line carries a bracketed tag (`[INFO]`, `[SUCCESS]`,
//! `[WARN]`, `[ERROR]`) so logs stay greppable with or without color.
//!
//! # Example
//!
//! ```
//! use memorai_setup::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("My App");
//! ui.success("Setup complete!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::{NoopSpinner, ProgressSpinner};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, SetupTheme, StatusKind};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display an untagged line.
    fn message(&mut self, msg: &str);

    /// Display an `[INFO]` line.
    fn info(&mut self, msg: &str);

    /// Display a `[SUCCESS]` line.
    fn success(&mut self, msg: &str);

    /// Display a `[WARN]` line.
    fn warning(&mut self, msg: &str);

    /// Display an `[ERROR]` line. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Display captured output that explains a failure. Shown in every output mode.
    fn error_output(&mut self, output: &str);

    /// Display captured command output (verbose mode only).
    fn command_output(&mut self, output: &str);

    /// Start a spinner for a blocking operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Stop and clear the spinner.
    fn finish(&mut self);
}
