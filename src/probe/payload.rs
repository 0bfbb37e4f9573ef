//! The probe's JSON response.

use serde::{Deserialize, Serialize};

/// Outcome reported by the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ready,
    Error,
}

/// The JSON object the probe prints as its last stdout line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelProbeResult {
    pub status: ProbeStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModelProbeResult {
    /// Find the payload in probe stdout.
    ///
    /// Scans from the last line backwards and returns the first line that
    /// parses as a payload object; status lines before it are ignored.
    pub fn from_stdout(stdout: &str) -> Option<Self> {
        stdout
            .lines()
            .rev()
            .map(str::trim)
            .filter(|line| line.starts_with('{'))
            .find_map(|line| serde_json::from_str(line).ok())
    }

    pub fn is_ready(&self) -> bool {
        self.status == ProbeStatus::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ready_payload_after_status_lines() {
        let stdout = "\
[INFO] Downloading embedding model (all-MiniLM-L6-v2)...
[INFO] Testing model...
[SUCCESS] Model loaded successfully! Embedding dimension: 384
{\"model\": \"all-MiniLM-L6-v2\", \"dimension\": 384, \"status\": \"ready\"}
";
        let payload = ModelProbeResult::from_stdout(stdout).unwrap();
        assert!(payload.is_ready());
        assert_eq!(payload.model.as_deref(), Some("all-MiniLM-L6-v2"));
        assert_eq!(payload.dimension, Some(384));
        assert_eq!(payload.error, None);
    }

    #[test]
    fn parses_error_payload() {
        let stdout = "[ERROR] Model download failed: offline\n\
                      {\"status\": \"error\", \"error\": \"offline\"}\n";
        let payload = ModelProbeResult::from_stdout(stdout).unwrap();
        assert_eq!(payload.status, ProbeStatus::Error);
        assert_eq!(payload.error.as_deref(), Some("offline"));
    }

    #[test]
    fn last_payload_wins() {
        let stdout = "{\"status\": \"error\", \"error\": \"first\"}\n\
                      {\"status\": \"ready\", \"dimension\": 8}\n";
        let payload = ModelProbeResult::from_stdout(stdout).unwrap();
        assert!(payload.is_ready());
    }

    #[test]
    fn missing_payload_is_none() {
        assert_eq!(ModelProbeResult::from_stdout("[INFO] nothing here\n"), None);
        assert_eq!(ModelProbeResult::from_stdout("{not json}\n"), None);
        assert_eq!(ModelProbeResult::from_stdout("{\"status\": \"weird\"}"), None);
    }

    #[test]
    fn serializes_without_empty_fields() {
        let payload = ModelProbeResult {
            status: ProbeStatus::Ready,
            model: Some("m".into()),
            dimension: Some(3),
            error: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"status":"ready","model":"m","dimension":3}"#);
    }
}
