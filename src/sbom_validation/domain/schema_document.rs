use super::{Dialect, VersionIdentifier};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Deterministic corpus lookup key for a `(dialect, version)` pair.
///
/// Renders as a namespaced file name, e.g. `cyclonedx/bom-1.4.schema.json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaKey {
    dialect: Dialect,
    version: VersionIdentifier,
}

impl SchemaKey {
    pub fn new(dialect: Dialect, version: VersionIdentifier) -> Self {
        Self { dialect, version }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn version(&self) -> &VersionIdentifier {
        &self.version
    }

    /// File name of the schema inside its dialect namespace.
    pub fn file_name(&self) -> String {
        self.dialect.schema_file_name(self.version.as_str())
    }
}

impl fmt::Display for SchemaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.dialect.namespace(), self.file_name())
    }
}

impl Serialize for SchemaKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An immutable JSON Schema document together with the key it was
/// resolved from. Clones share the underlying text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDocument {
    key: SchemaKey,
    content: Arc<str>,
}

impl SchemaDocument {
    pub fn new(key: SchemaKey, content: impl Into<Arc<str>>) -> Self {
        Self {
            key,
            content: content.into(),
        }
    }

    pub fn key(&self) -> &SchemaKey {
        &self.key
    }

    pub fn dialect(&self) -> Dialect {
        self.key.dialect()
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}
