//! The probe program on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Source of the probe program, compiled into the binary.
pub const PROBE_SOURCE: &str = include_str!("../../assets/probe_model.py");

/// File name the probe is written to, relative to the working directory.
pub const PROBE_FILE_NAME: &str = ".memorai_model_probe.py";

/// The probe program materialized in a directory.
///
/// The file is removed when the guard drops, on every exit path of the
/// owning scope including unwinding.
#[derive(Debug)]
pub struct ProbeScript {
    path: PathBuf,
}

impl ProbeScript {
    /// Write the probe into `dir`, replacing any stale copy.
    pub fn materialize(dir: &Path) -> io::Result<Self> {
        let path = dir.join(PROBE_FILE_NAME);
        fs::write(&path, PROBE_SOURCE)?;
        tracing::debug!("Wrote probe to {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ProbeScript {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!("Could not remove probe {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{ModelProbeResult, ProbeStatus};
    use crate::shell::{execute, CommandResult, CommandSpec};
    use tempfile::TempDir;

    #[test]
    fn materialize_writes_probe_source() {
        let temp = TempDir::new().unwrap();
        let script = ProbeScript::materialize(temp.path()).unwrap();

        assert_eq!(script.path(), temp.path().join(PROBE_FILE_NAME));
        assert_eq!(fs::read_to_string(script.path()).unwrap(), PROBE_SOURCE);
    }

    #[test]
    fn drop_removes_file() {
        let temp = TempDir::new().unwrap();
        let path = {
            let script = ProbeScript::materialize(temp.path()).unwrap();
            script.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn drop_tolerates_file_already_removed() {
        let temp = TempDir::new().unwrap();
        let script = ProbeScript::materialize(temp.path()).unwrap();
        fs::remove_file(script.path()).unwrap();
        drop(script);
    }

    #[test]
    fn drop_runs_during_unwind() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_path_buf();
        let result = std::panic::catch_unwind(move || {
            let _script = ProbeScript::materialize(&dir).unwrap();
            panic!("probe invocation blew up");
        });
        assert!(result.is_err());
        assert!(!temp.path().join(PROBE_FILE_NAME).exists());
    }

    #[test]
    fn materialize_overwrites_stale_probe() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROBE_FILE_NAME), "stale").unwrap();
        let script = ProbeScript::materialize(temp.path()).unwrap();
        assert_eq!(fs::read_to_string(script.path()).unwrap(), PROBE_SOURCE);
    }

    const LOADING_STUB: &str = "\
class SentenceTransformer:
    def __init__(self, name):
        self.name = name

    def encode(self, sentence):
        return [0.0] * len(sentence)
";

    const OFFLINE_STUB: &str = "\
class SentenceTransformer:
    def __init__(self, name):
        raise OSError('offline')
";

    /// Runs the embedded script under `python3` with a stand-in
    /// `sentence_transformers` package. `None` when `python3` is unavailable.
    fn run_against_stub(stub: &str, model: &str, sentence: &str) -> Option<CommandResult> {
        if execute(&CommandSpec::new("python3").arg("--version")).is_err() {
            eprintln!("python3 not found; skipping");
            return None;
        }

        let temp = TempDir::new().unwrap();
        let package = temp.path().join("stubs").join("sentence_transformers");
        fs::create_dir_all(&package).unwrap();
        fs::write(package.join("__init__.py"), stub).unwrap();

        let script = ProbeScript::materialize(temp.path()).unwrap();
        let spec = CommandSpec::new("python3")
            .arg(script.path().to_string_lossy())
            .arg(model)
            .arg(sentence)
            .cwd(temp.path())
            .env("PYTHONPATH", temp.path().join("stubs").to_string_lossy())
            .env("PYTHONDONTWRITEBYTECODE", "1");
        Some(execute(&spec).unwrap())
    }

    fn last_line_payload(stdout: &str) -> ModelProbeResult {
        let last = stdout.lines().last().expect("no stdout");
        serde_json::from_str(last).unwrap()
    }

    #[test]
    fn embedded_script_reports_ready_with_argv_model_and_sentence() {
        let Some(result) = run_against_stub(LOADING_STUB, "tiny-model", "four") else {
            return;
        };

        assert_eq!(result.exit_code, Some(0), "stderr: {}", result.stderr);
        assert!(result
            .stdout
            .contains("[SUCCESS] Model loaded successfully! Embedding dimension: 4"));
        let payload = last_line_payload(&result.stdout);
        assert_eq!(payload.status, ProbeStatus::Ready);
        assert_eq!(payload.model.as_deref(), Some("tiny-model"));
        assert_eq!(payload.dimension, Some(4));
    }

    #[test]
    fn embedded_script_catches_load_errors_and_exits_two() {
        let Some(result) = run_against_stub(OFFLINE_STUB, "all-MiniLM-L6-v2", "x") else {
            return;
        };

        assert_eq!(result.exit_code, Some(2), "stderr: {}", result.stderr);
        assert!(result.stdout.contains("[ERROR] Model download failed: offline"));
        let payload = last_line_payload(&result.stdout);
        assert_eq!(payload.status, ProbeStatus::Error);
        assert_eq!(payload.error.as_deref(), Some("offline"));
    }

    #[test]
    fn materialize_fails_for_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");
        assert!(ProbeScript::materialize(&missing).is_err());
    }
}
