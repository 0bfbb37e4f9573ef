//! Embedding model download and smoke test.

use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};
use crate::probe::{ModelProbeResult, ProbeScript};
use crate::shell::{CommandRunner, CommandSpec};
use crate::ui::UserInterface;

use super::report::{command_failed, report_failure, report_success, run_captured};
use super::SetupStep;

const DESCRIPTION: &str = "Downloading and testing embedding model";

/// Loads the model through the probe and checks that it encodes.
pub struct ModelValidator<'a> {
    runner: &'a dyn CommandRunner,
    python: String,
    model: String,
    sentence: String,
    work_dir: PathBuf,
    verify_payload: bool,
}

impl<'a> ModelValidator<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        python: &str,
        model: &str,
        sentence: &str,
        work_dir: &Path,
    ) -> Self {
        Self {
            runner,
            python: python.to_string(),
            model: model.to_string(),
            sentence: sentence.to_string(),
            work_dir: work_dir.to_path_buf(),
            verify_payload: false,
        }
    }

    /// Treat an error payload (or no payload) as a failure even on exit 0.
    pub fn verify_payload(mut self, verify: bool) -> Self {
        self.verify_payload = verify;
        self
    }

    fn probe_failed(&self, message: impl Into<String>) -> SetupError {
        SetupError::ModelProbeFailed {
            model: self.model.clone(),
            message: message.into(),
        }
    }

    /// Run the probe and return its parsed payload, if it printed one.
    ///
    /// The probe file exists only for the duration of this call.
    pub fn validate(&self, ui: &mut dyn UserInterface) -> Result<Option<ModelProbeResult>> {
        let script = match ProbeScript::materialize(&self.work_dir) {
            Ok(script) => script,
            Err(e) => {
                ui.error(&format!("{} failed with error: {}", DESCRIPTION, e));
                return Err(self.probe_failed(format!("could not write probe: {}", e)));
            }
        };

        let spec = CommandSpec::new(&self.python)
            .arg(script.path().to_string_lossy())
            .arg(&self.model)
            .arg(&self.sentence)
            .cwd(&self.work_dir)
            .env("PYTHONIOENCODING", "utf-8");

        let result = run_captured(self.runner, &spec, DESCRIPTION, ui)
            .map_err(|e| self.probe_failed(e.to_string()))?;
        drop(script);

        let payload = ModelProbeResult::from_stdout(&result.stdout);

        if !result.success {
            report_failure(&result, DESCRIPTION, ui);
            // The reason is on stdout; stderr is mostly download progress.
            return match payload.as_ref().and_then(|p| p.error.as_deref()) {
                Some(reason) => {
                    ui.error(&format!("Model probe reported an error: {}", reason));
                    Err(self.probe_failed(reason))
                }
                None => Err(self.probe_failed(command_failed(&spec, &result).to_string())),
            };
        }

        match &payload {
            Some(p) if p.is_ready() => {
                report_success(&result, DESCRIPTION, ui);
                if let Some(dimension) = p.dimension {
                    ui.info(&format!(
                        "Model {} ready (embedding dimension {})",
                        p.model.as_deref().unwrap_or(&self.model),
                        dimension
                    ));
                }
            }
            Some(p) => {
                let reason = p.error.as_deref().unwrap_or("unknown error");
                if self.verify_payload {
                    report_failure(&result, DESCRIPTION, ui);
                    ui.error(&format!("Model probe reported an error: {}", reason));
                    return Err(self.probe_failed(reason));
                }
                report_success(&result, DESCRIPTION, ui);
                ui.warning(&format!(
                    "Model probe exited cleanly but reported an error: {}",
                    reason
                ));
            }
            None => {
                if self.verify_payload {
                    report_failure(&result, DESCRIPTION, ui);
                    ui.error("Model probe did not report a result");
                    return Err(self.probe_failed("no result payload on stdout"));
                }
                report_success(&result, DESCRIPTION, ui);
                ui.warning("Model probe did not report a result");
            }
        }

        Ok(payload)
    }
}

impl SetupStep for ModelValidator<'_> {
    fn name(&self) -> &str {
        "model"
    }

    fn failure_message(&self) -> Option<String> {
        Some("Failed to download embedding model".to_string())
    }

    fn run(&self, ui: &mut dyn UserInterface) -> Result<()> {
        self.validate(ui).map(|_| ())
    }
}
