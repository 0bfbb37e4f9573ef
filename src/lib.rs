//! memorai-setup - Local AI setup for Memorai.
//!
//! Prepares the local embedding tier: verifies the Python interpreter,
//! installs `sentence-transformers` with pip, and downloads the
//! `all-MiniLM-L6-v2` model by running a small probe that encodes one
//! sentence. The steps run in order and the first failure ends the run.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file loading and overrides
//! - [`error`] - Error types and result aliases
//! - [`pipeline`] - Step orchestration and the closing summary
//! - [`probe`] - The embedded model probe and its JSON result
//! - [`runtime`] - Interpreter version parsing and comparison
//! - [`shell`] - Subprocess execution
//! - [`steps`] - Version gate, package installer, model validator
//! - [`ui`] - Tagged status output, spinners, and a mock UI
//!
//! # Example
//!
//! ```
//! use memorai_setup::config::SetupConfig;
//! use memorai_setup::pipeline::{local_ai_pipeline, PipelineOptions};
//! use memorai_setup::shell::ScriptedRunner;
//! use memorai_setup::ui::MockUI;
//!
//! // Stand-in for Python 3.7: the pipeline stops at the version gate.
//! let runner = ScriptedRunner::new(|_| ScriptedRunner::ok("Python 3.7.5\n"));
//! let dir = std::env::temp_dir();
//! let mut ui = MockUI::new();
//!
//! let result = local_ai_pipeline(&SetupConfig::default(), &runner, &dir, PipelineOptions::default())
//!     .run(&mut ui);
//! assert_eq!(result.exit_code(), 1);
//! assert_eq!(runner.calls().len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod probe;
pub mod runtime;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{Result, SetupError};
