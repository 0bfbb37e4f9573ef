//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use memorai_setup::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.info("Starting setup");
//! ui.success("Done!");
//!
//! // Assert on captured interactions
//! assert!(ui.infos().contains(&"Starting setup".to_string()));
//! assert!(ui.has_success("Done"));
//! ```

use super::{SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    infos: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    error_outputs: Vec<String>,
    command_outputs: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    ///
    /// Captures every call regardless of output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured `[INFO]` messages.
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured raw error output blocks (e.g. subprocess stderr).
    pub fn error_outputs(&self) -> &[String] {
        &self.error_outputs
    }

    /// Get all captured command output blocks.
    pub fn command_outputs(&self) -> &[String] {
        &self.command_outputs
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner messages started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Check whether a success message containing `needle` was shown.
    pub fn has_success(&self, needle: &str) -> bool {
        self.successes.iter().any(|s| s.contains(needle))
    }

    /// Check whether a warning message containing `needle` was shown.
    pub fn has_warning(&self, needle: &str) -> bool {
        self.warnings.iter().any(|s| s.contains(needle))
    }

    /// Check whether an error message or error output containing `needle` was shown.
    pub fn has_error(&self, needle: &str) -> bool {
        self.errors
            .iter()
            .chain(self.error_outputs.iter())
            .any(|s| s.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn info(&mut self, msg: &str) {
        self.infos.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn error_output(&mut self, output: &str) {
        self.error_outputs.push(output.to_string());
    }

    fn command_output(&mut self, output: &str) {
        self.command_outputs.push(output.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }
}

/// Mock spinner that does nothing.
pub struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn finish(&mut self) {}
}
