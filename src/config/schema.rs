//! Configuration schema.
//!
//! Maps the optional `setup.yml` file format. Every field has a default, so
//! an empty file (or no file) yields [`SetupConfig::default`].

use serde::{Deserialize, Serialize};

use crate::runtime::MinimumVersion;
use crate::shell::default_python;

/// Default package installed for local embeddings.
pub const DEFAULT_PACKAGE: &str = "sentence-transformers";

/// Default pretrained embedding model.
pub const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";

/// Sentence encoded by the model probe.
pub const DEFAULT_TEST_SENTENCE: &str = "This is a test sentence.";

/// Root configuration structure for `setup.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    /// Interpreter used for the version gate, pip, and the model probe.
    pub python: String,

    /// Package installed with pip.
    pub package: String,

    /// Extra arguments passed to `pip install` before the package name.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pip_args: Vec<String>,

    /// Pretrained model loaded by the probe.
    pub model: String,

    /// Sentence encoded by the probe.
    pub test_sentence: String,

    /// Lowest accepted interpreter version (`MAJOR.MINOR`).
    pub min_python: MinimumVersion,

    /// Fail the model step when the probe's JSON payload reports an error,
    /// even if the probe exited with status 0.
    pub verify_payload: bool,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            python: default_python().to_string(),
            package: DEFAULT_PACKAGE.to_string(),
            pip_args: Vec::new(),
            model: DEFAULT_MODEL.to_string(),
            test_sentence: DEFAULT_TEST_SENTENCE.to_string(),
            min_python: MinimumVersion::default(),
            verify_payload: false,
        }
    }
}

/// Values from the environment and command line that override the file.
///
/// `None` leaves the file (or default) value in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub python: Option<String>,
    pub package: Option<String>,
    pub model: Option<String>,
    pub verify_payload: Option<bool>,
}

impl SetupConfig {
    /// Apply overrides in place.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(python) = overrides.python.as_deref().filter(|p| !p.is_empty()) {
            self.python = python.to_string();
        }
        if let Some(package) = &overrides.package {
            self.package = package.clone();
        }
        if let Some(model) = &overrides.model {
            self.model = model.clone();
        }
        if let Some(verify) = overrides.verify_payload {
            self.verify_payload = verify;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_ai_setup() {
        let config = SetupConfig::default();
        assert_eq!(config.python, "python");
        assert_eq!(config.package, "sentence-transformers");
        assert_eq!(config.model, "all-MiniLM-L6-v2");
        assert_eq!(config.test_sentence, "This is a test sentence.");
        assert_eq!(config.min_python, MinimumVersion::new(3, 8));
        assert!(!config.verify_payload);
        assert!(config.pip_args.is_empty());
    }

    #[test]
    fn empty_yaml_uses_defaults() {
        let config: SetupConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, SetupConfig::default());
    }

    #[test]
    fn partial_yaml_overrides_fields() {
        let yaml = r#"
python: /opt/py311/bin/python3
min_python: "3.10"
pip_args: ["--user", "--quiet"]
verify_payload: true
"#;
        let config: SetupConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.python, "/opt/py311/bin/python3");
        assert_eq!(config.min_python, MinimumVersion::new(3, 10));
        assert_eq!(config.pip_args, vec!["--user", "--quiet"]);
        assert!(config.verify_payload);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<SetupConfig, _> = serde_yaml::from_str("modle: typo\n");
        assert!(result.is_err());
    }

    #[test]
    fn malformed_min_python_rejected() {
        let result: Result<SetupConfig, _> = serde_yaml::from_str("min_python: \"3\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn overrides_replace_values() {
        let mut config = SetupConfig::default();
        config.apply(&ConfigOverrides {
            python: Some("python3.12".into()),
            package: None,
            model: Some("paraphrase-MiniLM-L3-v2".into()),
            verify_payload: Some(true),
        });
        assert_eq!(config.python, "python3.12");
        assert_eq!(config.package, DEFAULT_PACKAGE);
        assert_eq!(config.model, "paraphrase-MiniLM-L3-v2");
        assert!(config.verify_payload);
    }

    #[test]
    fn empty_python_override_is_ignored() {
        let mut config = SetupConfig::default();
        config.apply(&ConfigOverrides {
            python: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(config.python, "python");
    }
}
