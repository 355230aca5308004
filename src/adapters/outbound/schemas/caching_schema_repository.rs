use crate::ports::outbound::SchemaRepository;
use crate::sbom_validation::domain::Dialect;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for schema documents
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    dialect: Dialect,
    file_name: String,
}

impl CacheKey {
    fn new(dialect: Dialect, file_name: &str) -> Self {
        Self {
            dialect,
            file_name: file_name.to_string(),
        }
    }
}

/// CachingSchemaRepository wraps a SchemaRepository and adds in-memory caching.
///
/// Documents are cached on first successful fetch and never invalidated;
/// the wrapped corpus is immutable. Concurrent misses for the same key may
/// both reach the inner repository, and the later insert simply overwrites
/// an identical entry. Misses are not cached.
pub struct CachingSchemaRepository<R: SchemaRepository> {
    inner: R,
    cache: Arc<DashMap<CacheKey, Arc<str>>>,
}

impl<R: SchemaRepository> CachingSchemaRepository<R> {
    /// Creates a new caching repository wrapping the given inner repository
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: SchemaRepository> SchemaRepository for CachingSchemaRepository<R> {
    fn supports_dialect(&self, dialect: Dialect) -> bool {
        self.inner.supports_dialect(dialect)
    }

    fn fetch_document(&self, dialect: Dialect, file_name: &str) -> Option<Arc<str>> {
        let key = CacheKey::new(dialect, file_name);

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(%dialect, file_name, "schema cache hit");
            return Some(cached.clone());
        }

        let document = self.inner.fetch_document(dialect, file_name)?;
        self.cache.insert(key, document.clone());
        Some(document)
    }

    fn available_versions(&self, dialect: Dialect) -> Vec<String> {
        self.inner.available_versions(dialect)
    }
}
