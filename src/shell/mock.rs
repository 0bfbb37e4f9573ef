//! Scripted command runner for testing.
//!
//! `ScriptedRunner` implements [`CommandRunner`] without spawning processes.
//! Each invocation is recorded and answered by a responder closure, so tests
//! can decide the outcome per command and inspect what the steps ran.
//!
//! # Example
//!
//! ```
//! use memorai_setup::shell::{CommandRunner, CommandSpec, ScriptedRunner};
//!
//! let runner = ScriptedRunner::new(|spec| {
//!     if spec.args.first().map(String::as_str) == Some("--version") {
//!         ScriptedRunner::ok("Python 3.9.0\n")
//!     } else {
//!         ScriptedRunner::fail(1, "boom")
//!     }
//! });
//!
//! let result = runner.run(&CommandSpec::new("python").arg("--version")).unwrap();
//! assert!(result.success);
//! assert_eq!(runner.calls().len(), 1);
//! ```

use std::cell::RefCell;
use std::time::Duration;

use crate::error::{Result, SetupError};

use super::command::{CommandResult, CommandRunner, CommandSpec};

type Responder = Box<dyn Fn(&CommandSpec) -> Result<CommandResult>>;

/// Command runner that replays scripted results.
pub struct ScriptedRunner {
    responder: Responder,
    calls: RefCell<Vec<CommandSpec>>,
}

impl ScriptedRunner {
    /// Create a runner that answers every command with `responder`.
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&CommandSpec) -> Result<CommandResult> + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A runner where every command succeeds with empty output.
    pub fn always_ok() -> Self {
        Self::new(|_| Self::ok(""))
    }

    /// Successful result with the given stdout.
    pub fn ok(stdout: &str) -> Result<CommandResult> {
        Ok(CommandResult::success(
            stdout.to_string(),
            String::new(),
            Duration::ZERO,
        ))
    }

    /// Failed result with the given exit code and stderr.
    pub fn fail(code: i32, stderr: &str) -> Result<CommandResult> {
        Ok(CommandResult::failure(
            Some(code),
            String::new(),
            stderr.to_string(),
            Duration::ZERO,
        ))
    }

    /// Error as if the program could not be started.
    pub fn spawn_error(spec: &CommandSpec, message: &str) -> Result<CommandResult> {
        Err(SetupError::CommandSpawn {
            command: spec.to_string(),
            message: message.to_string(),
        })
    }

    /// All commands run so far, in order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    /// Whether any recorded command had `needle` among its arguments.
    pub fn ran_with_arg(&self, needle: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|c| c.args.iter().any(|a| a == needle))
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandResult> {
        self.calls.borrow_mut().push(spec.clone());
        (self.responder)(spec)
    }
}
