//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands that
//! spawn processes also expose `execute_with`, taking the
//! [`CommandRunner`](crate::shell::CommandRunner) to use.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod probe;
pub mod run;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
