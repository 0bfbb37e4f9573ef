//! Setup steps.
//!
//! Each step implements [`SetupStep`]. A step reports its own progress and
//! failure through the UI and returns the failure as a value; it never
//! panics on a failed command.
//!
//! - [`VersionGate`] - interpreter version check
//! - [`DependencyInstaller`] - `pip install` of the embedding library
//! - [`ModelValidator`] - model download and encode smoke test

pub mod install;
pub mod model;
pub mod report;
pub mod version;

pub use install::DependencyInstaller;
pub use model::ModelValidator;
pub use report::run_reported;
pub use version::VersionGate;

use crate::error::Result;
use crate::ui::UserInterface;

/// One stage of the setup pipeline.
pub trait SetupStep {
    /// Short identifier used in logs and results.
    fn name(&self) -> &str;

    /// Line printed by the pipeline when this step fails, if any.
    fn failure_message(&self) -> Option<String>;

    /// Run the step, reporting progress through `ui`.
    fn run(&self, ui: &mut dyn UserInterface) -> Result<()>;
}
