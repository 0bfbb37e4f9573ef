//! Interpreter version parsing and comparison.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static RE_PYTHON_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Python\s+(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

static RE_MINIMUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.(\d+)\s*$").unwrap());

/// Version reported by a Python interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl PythonVersion {
    pub fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Extract the version from `python --version` output.
    ///
    /// Accepts a missing micro component (reported as 0) and trailing
    /// pre-release tags such as `rc1`.
    pub fn parse_output(output: &str) -> Option<Self> {
        let caps = RE_PYTHON_VERSION.captures(output)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let micro = caps
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
        Some(Self::new(major, minor, micro))
    }

    /// Whether this version is at least `minimum`, comparing (major, minor).
    pub fn satisfies(&self, minimum: &MinimumVersion) -> bool {
        (self.major, self.minor) >= (minimum.major, minimum.minor)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// Lowest acceptable `major.minor` interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MinimumVersion {
    pub major: u32,
    pub minor: u32,
}

impl MinimumVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl Default for MinimumVersion {
    fn default() -> Self {
        Self::new(3, 8)
    }
}

impl fmt::Display for MinimumVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for MinimumVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = RE_MINIMUM
            .captures(s)
            .ok_or_else(|| format!("expected MAJOR.MINOR, got '{}'", s))?;
        let major = caps[1]
            .parse()
            .map_err(|_| format!("major version out of range in '{}'", s))?;
        let minor = caps[2]
            .parse()
            .map_err(|_| format!("minor version out of range in '{}'", s))?;
        Ok(Self::new(major, minor))
    }
}

impl TryFrom<String> for MinimumVersion {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MinimumVersion> for String {
    fn from(value: MinimumVersion) -> Self {
        value.to_string()
    }
}
