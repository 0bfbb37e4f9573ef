//! Error types for setup operations.
//!
//! This module defines [`SetupError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Each pipeline step reports its own failure as a `SetupError` value
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for setup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The interpreter is older than the required minimum.
    #[error("Python {found} is not compatible. Need Python {required}+")]
    IncompatibleRuntime { found: String, required: String },

    /// The interpreter could not be run or its version could not be read.
    #[error("Could not determine Python version from '{interpreter}': {message}")]
    RuntimeUndetected {
        interpreter: String,
        message: String,
    },

    /// The package manager failed to install a package.
    #[error("Failed to install {package}: {message}")]
    InstallFailed { package: String, message: String },

    /// The model probe failed to download or encode with the model.
    #[error("Model '{model}' failed validation: {message}")]
    ModelProbeFailed { model: String, message: String },

    /// Command exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Command could not be started at all.
    #[error("Could not run '{command}': {message}")]
    CommandSpawn { command: String, message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
