use crate::sbom_validation::domain::{Dialect, SchemaKey, ValidationResult, VersionIdentifier};

/// ValidationReport - response DTO of the validation use case
///
/// Carries the structural verdict together with the facts the pipeline
/// established on the way (dialect, version, schema key), so formatters
/// can show what the document was checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub dialect: Dialect,
    pub version: VersionIdentifier,
    pub schema: SchemaKey,
    pub result: ValidationResult,
}

impl ValidationReport {
    pub fn new(
        dialect: Dialect,
        version: VersionIdentifier,
        schema: SchemaKey,
        result: ValidationResult,
    ) -> Self {
        Self {
            dialect,
            version,
            schema,
            result,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }
}
