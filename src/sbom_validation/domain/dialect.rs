use serde::Serialize;
use std::fmt;

/// SBOM format family a document belongs to.
///
/// The set is closed: every stage of the pipeline matches on it
/// exhaustively, so adding a dialect is a compile-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Dialect {
    #[serde(rename = "CycloneDX")]
    CycloneDx,
    #[serde(rename = "SPDX")]
    Spdx,
}

impl Dialect {
    /// All dialects, in classification priority order.
    pub const ALL: [Dialect; 2] = [Dialect::CycloneDx, Dialect::Spdx];

    /// Top-level field whose presence identifies the dialect.
    pub fn marker_field(self) -> &'static str {
        match self {
            Dialect::CycloneDx => "bomFormat",
            Dialect::Spdx => "spdxVersion",
        }
    }

    /// Top-level field carrying the schema version.
    pub fn version_field(self) -> &'static str {
        match self {
            Dialect::CycloneDx => "specVersion",
            Dialect::Spdx => "spdxVersion",
        }
    }

    /// Directory-style namespace of the dialect inside a schema corpus.
    pub fn namespace(self) -> &'static str {
        match self {
            Dialect::CycloneDx => "cyclonedx",
            Dialect::Spdx => "spdx",
        }
    }

    /// Name of the schema document for `version` within the namespace.
    pub fn schema_file_name(self, version: &str) -> String {
        match self {
            Dialect::CycloneDx => format!("bom-{}.schema.json", version),
            Dialect::Spdx => format!("spdx-{}.schema.json", version),
        }
    }

    /// Inverse of [`Dialect::schema_file_name`]; `None` for companion
    /// documents such as `spdx.schema.json`.
    pub fn version_from_file_name(self, file_name: &str) -> Option<&str> {
        let (prefix, suffix) = match self {
            Dialect::CycloneDx => ("bom-", ".schema.json"),
            Dialect::Spdx => ("spdx-", ".schema.json"),
        };
        file_name
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(suffix))
            .filter(|version| !version.is_empty())
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::CycloneDx => write!(f, "CycloneDX"),
            Dialect::Spdx => write!(f, "SPDX"),
        }
    }
}
