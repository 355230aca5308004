use super::versions_in;
use crate::ports::outbound::SchemaRepository;
use crate::sbom_validation::domain::Dialect;
use std::collections::HashMap;
use std::sync::Arc;

/// InMemorySchemaRepository adapter backed by a map
///
/// Useful for tests and for embedding a custom corpus. A dialect is
/// supported once at least one document was added for it.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchemaRepository {
    documents: HashMap<(Dialect, String), Arc<str>>,
}

impl InMemorySchemaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`InMemorySchemaRepository::insert`]
    pub fn with_document(
        mut self,
        dialect: Dialect,
        file_name: impl Into<String>,
        content: impl Into<Arc<str>>,
    ) -> Self {
        self.insert(dialect, file_name, content);
        self
    }

    pub fn insert(
        &mut self,
        dialect: Dialect,
        file_name: impl Into<String>,
        content: impl Into<Arc<str>>,
    ) {
        self.documents
            .insert((dialect, file_name.into()), content.into());
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl SchemaRepository for InMemorySchemaRepository {
    fn supports_dialect(&self, dialect: Dialect) -> bool {
        self.documents.keys().any(|(d, _)| *d == dialect)
    }

    fn fetch_document(&self, dialect: Dialect, file_name: &str) -> Option<Arc<str>> {
        self.documents
            .get(&(dialect, file_name.to_string()))
            .cloned()
    }

    fn available_versions(&self, dialect: Dialect) -> Vec<String> {
        versions_in(
            dialect,
            self.documents
                .keys()
                .filter(|(d, _)| *d == dialect)
                .map(|(_, name)| name.as_str()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_repository_supports_nothing() {
        let repository = InMemorySchemaRepository::new();
        assert!(repository.is_empty());
        assert!(!repository.supports_dialect(Dialect::CycloneDx));
        assert!(!repository.supports_dialect(Dialect::Spdx));
    }

    #[test]
    fn test_documents_are_namespaced_by_dialect() {
        let repository = InMemorySchemaRepository::new()
            .with_document(Dialect::Spdx, "spdx-2.3.schema.json", "{}");

        assert!(repository.supports_dialect(Dialect::Spdx));
        assert!(!repository.supports_dialect(Dialect::CycloneDx));
        assert!(repository
            .fetch_document(Dialect::Spdx, "spdx-2.3.schema.json")
            .is_some());
        assert!(repository
            .fetch_document(Dialect::CycloneDx, "spdx-2.3.schema.json")
            .is_none());
        assert_eq!(repository.available_versions(Dialect::Spdx), vec!["2.3"]);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut repository = InMemorySchemaRepository::new();
        repository.insert(Dialect::CycloneDx, "bom-1.4.schema.json", "{}");
        repository.insert(Dialect::CycloneDx, "bom-1.4.schema.json", "{\"type\": \"object\"}");
        assert_eq!(repository.len(), 1);
        assert_eq!(
            &*repository
                .fetch_document(Dialect::CycloneDx, "bom-1.4.schema.json")
                .unwrap(),
            "{\"type\": \"object\"}"
        );
    }
}
