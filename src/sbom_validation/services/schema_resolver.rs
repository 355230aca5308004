use crate::ports::outbound::SchemaRepository;
use crate::sbom_validation::domain::{Dialect, SchemaDocument, SchemaKey, VersionIdentifier};
use crate::shared::error::ValidationError;
use crate::shared::PipelineResult;

/// SchemaResolver service for mapping `(dialect, version)` to a schema
///
/// Resolution is a pure read against the repository; failures are
/// reported as distinct errors so callers can tell a dialect without any
/// schemas apart from a single missing version.
pub struct SchemaResolver;

impl SchemaResolver {
    /// Resolves the schema for `version` of `dialect`
    ///
    /// # Errors
    /// - `UnsupportedDialect` if the repository has no schemas for `dialect`
    /// - `SchemaNotFound` if there is no schema for this version; carries
    ///   the attempted key and the versions that do exist
    pub fn resolve<R: SchemaRepository + ?Sized>(
        repository: &R,
        version: &VersionIdentifier,
        dialect: Dialect,
    ) -> PipelineResult<SchemaDocument> {
        if !repository.supports_dialect(dialect) {
            return Err(ValidationError::UnsupportedDialect { dialect });
        }

        let key = SchemaKey::new(dialect, version.clone());
        match repository.fetch_schema(&key) {
            Some(schema) => {
                tracing::debug!(%key, "schema resolved");
                Ok(schema)
            }
            None => Err(ValidationError::SchemaNotFound {
                available: repository.available_versions(dialect),
                key,
            }),
        }
    }
}
