use sbom_validator::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock SchemaRepository for testing
///
/// Wraps an in-memory corpus and counts document fetches.
#[allow(dead_code)]
pub struct MockSchemaRepository {
    inner: InMemorySchemaRepository,
    fetch_count: AtomicUsize,
}

#[allow(dead_code)]
impl MockSchemaRepository {
    pub fn new() -> Self {
        Self {
            inner: InMemorySchemaRepository::new(),
            fetch_count: AtomicUsize::new(0),
        }
    }

    pub fn with_schema(mut self, dialect: Dialect, version: &str, content: &str) -> Self {
        let file_name = SchemaKey::new(dialect, version.into()).file_name();
        self.inner.insert(dialect, file_name, content);
        self
    }

    pub fn with_document(mut self, dialect: Dialect, file_name: &str, content: &str) -> Self {
        self.inner.insert(dialect, file_name, content);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

impl SchemaRepository for MockSchemaRepository {
    fn supports_dialect(&self, dialect: Dialect) -> bool {
        self.inner.supports_dialect(dialect)
    }

    fn fetch_document(&self, dialect: Dialect, file_name: &str) -> Option<Arc<str>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_document(dialect, file_name)
    }

    fn available_versions(&self, dialect: Dialect) -> Vec<String> {
        self.inner.available_versions(dialect)
    }
}
