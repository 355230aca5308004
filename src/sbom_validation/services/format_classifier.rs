use crate::sbom_validation::domain::{Dialect, ParsedDocument};
use crate::shared::error::ValidationError;
use crate::shared::PipelineResult;

/// Expected value of the CycloneDX `bomFormat` marker.
const CYCLONEDX_BOM_FORMAT: &str = "CycloneDX";

/// FormatClassifier service for identifying the SBOM dialect
///
/// Inspects top-level marker fields in priority order: a string `bomFormat`
/// means CycloneDX and wins over everything else, then a string
/// `spdxVersion` means SPDX. Markers of any other JSON type are ignored.
pub struct FormatClassifier;

impl FormatClassifier {
    /// Classifies `document`
    ///
    /// # Errors
    /// `UnknownFormat` when no correctly-typed marker is present
    pub fn detect(document: &ParsedDocument) -> PipelineResult<Dialect> {
        let dialect = Dialect::ALL
            .into_iter()
            .find(|dialect| document.has_string_field(dialect.marker_field()))
            .ok_or(ValidationError::UnknownFormat)?;

        if dialect == Dialect::CycloneDx {
            if let Ok(bom_format) = document.string_field(dialect.marker_field()) {
                if bom_format != CYCLONEDX_BOM_FORMAT {
                    tracing::warn!(
                        bom_format,
                        "unexpected bomFormat value, classifying as CycloneDX anyway"
                    );
                }
            }
        }

        tracing::debug!(%dialect, "SBOM type detected");
        Ok(dialect)
    }
}
