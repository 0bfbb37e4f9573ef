//! Embedding model probe.
//!
//! The probe is a small Python helper shipped inside the binary. It is
//! written next to the project for the duration of one invocation, takes
//! the model name and test sentence as arguments, and answers with one JSON
//! line on stdout ([`ModelProbeResult`]).

pub mod payload;
pub mod script;

pub use payload::{ModelProbeResult, ProbeStatus};
pub use script::{ProbeScript, PROBE_FILE_NAME, PROBE_SOURCE};
