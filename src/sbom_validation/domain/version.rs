use serde::Serialize;
use std::fmt;

/// Schema version token of an SBOM, meaningful only relative to its dialect
/// (`1.4` for CycloneDX, `2.3` for SPDX).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionIdentifier(String);

impl VersionIdentifier {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VersionIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for VersionIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
