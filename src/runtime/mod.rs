//! Host interpreter detection.

pub mod version;

pub use version::{MinimumVersion, PythonVersion};
