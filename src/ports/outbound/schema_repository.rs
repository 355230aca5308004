use crate::sbom_validation::domain::{Dialect, SchemaDocument, SchemaKey};
use std::sync::Arc;

/// SchemaRepository port for reading the schema corpus
///
/// This port abstracts where JSON Schema documents come from (embedded in
/// the binary, a directory, an in-memory fixture). Documents are addressed
/// by dialect namespace and file name, so companion documents referenced via
/// `$ref` (e.g. `spdx.schema.json`) are reachable the same way as the
/// versioned `bom-<version>.schema.json` files.
///
/// Implementations must be `Send + Sync`; the corpus is read-only for the
/// lifetime of the repository.
pub trait SchemaRepository: Send + Sync {
    /// Whether any schema for `dialect` is available at all
    fn supports_dialect(&self, dialect: Dialect) -> bool;

    /// Fetches the raw text of a document in the dialect's namespace
    ///
    /// # Returns
    /// `None` when no document with that name exists
    fn fetch_document(&self, dialect: Dialect, file_name: &str) -> Option<Arc<str>>;

    /// Versions with a schema document for `dialect`, sorted ascending
    fn available_versions(&self, dialect: Dialect) -> Vec<String>;

    /// Fetches the versioned schema addressed by `key`
    fn fetch_schema(&self, key: &SchemaKey) -> Option<SchemaDocument> {
        self.fetch_document(key.dialect(), &key.file_name())
            .map(|content| SchemaDocument::new(key.clone(), content))
    }
}

impl<R: SchemaRepository + ?Sized> SchemaRepository for Arc<R> {
    fn supports_dialect(&self, dialect: Dialect) -> bool {
        (**self).supports_dialect(dialect)
    }

    fn fetch_document(&self, dialect: Dialect, file_name: &str) -> Option<Arc<str>> {
        (**self).fetch_document(dialect, file_name)
    }

    fn available_versions(&self, dialect: Dialect) -> Vec<String> {
        (**self).available_versions(dialect)
    }
}

impl<R: SchemaRepository + ?Sized> SchemaRepository for &R {
    fn supports_dialect(&self, dialect: Dialect) -> bool {
        (**self).supports_dialect(dialect)
    }

    fn fetch_document(&self, dialect: Dialect, file_name: &str) -> Option<Arc<str>> {
        (**self).fetch_document(dialect, file_name)
    }

    fn available_versions(&self, dialect: Dialect) -> Vec<String> {
        (**self).available_versions(dialect)
    }
}
