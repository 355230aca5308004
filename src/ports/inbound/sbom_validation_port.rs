use crate::application::dto::ValidationReport;
use crate::sbom_validation::domain::{
    Dialect, ParsedDocument, SchemaDocument, ValidationResult, VersionIdentifier,
};
use crate::shared::PipelineResult;

/// SbomValidationPort - Inbound port for the SBOM validation use case
///
/// Exposes the composed pipeline as well as each stage on its own, for
/// callers that want to inspect intermediate results.
pub trait SbomValidationPort {
    /// Runs the full pipeline and returns only the verdict
    ///
    /// # Errors
    /// `UnsupportedFileFormat` if the input is not JSON; otherwise the
    /// error of the first failing stage
    fn validate(&self, sbom: &[u8]) -> PipelineResult<ValidationResult>;

    /// Runs the full pipeline and keeps the intermediate results for display
    fn execute(&self, sbom: &[u8]) -> PipelineResult<ValidationReport>;

    /// Classifies the document as a dialect
    fn detect_format(&self, document: &ParsedDocument) -> PipelineResult<Dialect>;

    /// Extracts the dialect-specific schema version
    fn extract_version(
        &self,
        document: &ParsedDocument,
        dialect: Dialect,
    ) -> PipelineResult<VersionIdentifier>;

    /// Resolves `(dialect, version)` to a schema document
    fn resolve_schema(
        &self,
        version: &VersionIdentifier,
        dialect: Dialect,
    ) -> PipelineResult<SchemaDocument>;

    /// Validates raw JSON text against a schema, collecting every violation
    fn validate_against_schema(
        &self,
        schema: &SchemaDocument,
        sbom: &str,
    ) -> PipelineResult<ValidationResult>;
}
