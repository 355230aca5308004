use crate::application::dto::ValidationReport;
use crate::ports::inbound::SbomValidationPort;
use crate::ports::outbound::SchemaRepository;
use crate::sbom_validation::domain::{
    Dialect, ParsedDocument, SchemaDocument, ValidationResult, VersionIdentifier,
};
use crate::sbom_validation::services::{
    FormatClassifier, SchemaResolver, StructuralValidator, VersionExtractor,
};
use crate::shared::error::ValidationError;
use crate::shared::PipelineResult;

/// ValidateSbomUseCase - Core use case for SBOM validation
///
/// This use case composes the four pipeline stages (classification,
/// version extraction, schema resolution, structural validation) over an
/// injected schema repository. The first failing stage short-circuits.
///
/// # Type Parameters
/// * `R` - SchemaRepository implementation
pub struct ValidateSbomUseCase<R> {
    schema_repository: R,
}

impl<R: SchemaRepository> ValidateSbomUseCase<R> {
    /// Creates a new ValidateSbomUseCase with injected dependencies
    pub fn new(schema_repository: R) -> Self {
        Self { schema_repository }
    }

    pub fn schema_repository(&self) -> &R {
        &self.schema_repository
    }

    /// Parses the raw input, reporting non-JSON input as an unsupported format
    fn parse_input(sbom: &[u8]) -> PipelineResult<ParsedDocument> {
        ParsedDocument::from_slice(sbom).map_err(|e| match e {
            ValidationError::MalformedJson { reason } => {
                ValidationError::UnsupportedFileFormat { reason }
            }
            other => other,
        })
    }
}

impl<R: SchemaRepository> SbomValidationPort for ValidateSbomUseCase<R> {
    fn validate(&self, sbom: &[u8]) -> PipelineResult<ValidationResult> {
        self.execute(sbom).map(|report| report.result)
    }

    fn execute(&self, sbom: &[u8]) -> PipelineResult<ValidationReport> {
        let document = Self::parse_input(sbom)?;

        let dialect = self.detect_format(&document)?;
        let version = self.extract_version(&document, dialect)?;
        let schema = self.resolve_schema(&version, dialect)?;
        let result = StructuralValidator::validate_document(
            &self.schema_repository,
            &schema,
            document.root(),
        )?;

        tracing::debug!(
            %dialect,
            %version,
            valid = result.is_valid(),
            violations = result.len(),
            "SBOM validated"
        );
        Ok(ValidationReport::new(
            dialect,
            version,
            schema.key().clone(),
            result,
        ))
    }

    fn detect_format(&self, document: &ParsedDocument) -> PipelineResult<Dialect> {
        FormatClassifier::detect(document)
    }

    fn extract_version(
        &self,
        document: &ParsedDocument,
        dialect: Dialect,
    ) -> PipelineResult<VersionIdentifier> {
        VersionExtractor::extract(document, dialect)
    }

    fn resolve_schema(
        &self,
        version: &VersionIdentifier,
        dialect: Dialect,
    ) -> PipelineResult<SchemaDocument> {
        SchemaResolver::resolve(&self.schema_repository, version, dialect)
    }

    fn validate_against_schema(
        &self,
        schema: &SchemaDocument,
        sbom: &str,
    ) -> PipelineResult<ValidationResult> {
        StructuralValidator::validate(&self.schema_repository, schema, sbom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::schemas::InMemorySchemaRepository;
    use crate::shared::error::ErrorKind;

    const SCHEMA: &str = r#"{
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["bomFormat", "specVersion"],
        "properties": {
            "bomFormat": { "enum": ["CycloneDX"] },
            "specVersion": { "type": "string" },
            "components": {
                "type": "array",
                "items": { "type": "object", "required": ["name"] }
            }
        }
    }"#;

    fn use_case() -> ValidateSbomUseCase<InMemorySchemaRepository> {
        ValidateSbomUseCase::new(
            InMemorySchemaRepository::new().with_document(
                Dialect::CycloneDx,
                "bom-1.4.schema.json",
                SCHEMA,
            ),
        )
    }

    #[test]
    fn test_execute_valid_document() {
        let report = use_case()
            .execute(br#"{"bomFormat": "CycloneDX", "specVersion": "1.4"}"#)
            .unwrap();

        assert!(report.is_valid());
        assert_eq!(report.dialect, Dialect::CycloneDx);
        assert_eq!(report.version.as_str(), "1.4");
        assert_eq!(report.schema.to_string(), "cyclonedx/bom-1.4.schema.json");
    }

    #[test]
    fn test_validate_collects_violations() {
        let result = use_case()
            .validate(br#"{"bomFormat": "CycloneDX", "specVersion": "1.4", "components": [{}, {}]}"#)
            .unwrap();

        assert!(!result.is_valid());
        assert_eq!(result.len(), 2);
        assert!(result
            .violations()
            .iter()
            .all(|v| v.keyword == "required"));
    }

    #[test]
    fn test_non_json_input_is_unsupported_file_format() {
        let err = use_case().validate(b"<bom/>").unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedFileFormat { .. }));
        assert_eq!(err.kind(), ErrorKind::MalformedJson);
    }

    #[test]
    fn test_empty_input_is_unsupported_file_format() {
        let err = use_case().validate(b"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedJson);
    }

    #[test]
    fn test_unknown_format_short_circuits() {
        let err = use_case().validate(br#"{"name": "x"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownFormat);
    }

    #[test]
    fn test_missing_version_short_circuits() {
        let err = use_case().validate(br#"{"bomFormat": "CycloneDX"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingVersion);
    }

    #[test]
    fn test_schema_not_found_lists_available_versions() {
        let err = use_case()
            .validate(br#"{"bomFormat": "CycloneDX", "specVersion": "9.9"}"#)
            .unwrap_err();

        match err {
            ValidationError::SchemaNotFound { key, available } => {
                assert_eq!(key.version().as_str(), "9.9");
                assert_eq!(available, vec!["1.4"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_spdx_without_schemas_is_unsupported_dialect() {
        let err = use_case()
            .validate(br#"{"spdxVersion": "SPDX-2.3"}"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedDialect);
    }

    #[test]
    fn test_stages_compose_like_execute() {
        let use_case = use_case();
        let text = r#"{"bomFormat": "CycloneDX", "specVersion": "1.4", "components": [{}]}"#;

        let document = ParsedDocument::parse(text).unwrap();
        let dialect = use_case.detect_format(&document).unwrap();
        let version = use_case.extract_version(&document, dialect).unwrap();
        let schema = use_case.resolve_schema(&version, dialect).unwrap();
        let staged = use_case.validate_against_schema(&schema, text).unwrap();

        assert_eq!(staged, use_case.validate(text.as_bytes()).unwrap());
    }
}
