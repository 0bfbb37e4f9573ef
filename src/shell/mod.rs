//! Subprocess execution and environment detection.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{execute, CommandResult, CommandRunner, CommandSpec, SystemRunner};
pub use mock::ScriptedRunner;
pub use platform::{default_python, is_ci};
