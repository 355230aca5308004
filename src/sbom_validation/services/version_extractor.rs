use crate::sbom_validation::domain::{Dialect, ParsedDocument, VersionIdentifier};
use crate::shared::error::ValidationError;
use crate::shared::PipelineResult;

/// VersionExtractor service for reading the schema version of an SBOM
///
/// CycloneDX stores the version verbatim in `specVersion`. SPDX embeds it
/// in `spdxVersion` as `<prefix>-<version>` (e.g. `SPDX-2.3`).
pub struct VersionExtractor;

impl VersionExtractor {
    /// Extracts the version identifier for `dialect`
    ///
    /// # Errors
    /// `MissingVersion` when the version field is absent, not a string, or
    /// (for SPDX) not of the form `<prefix>-<version>`
    pub fn extract(
        document: &ParsedDocument,
        dialect: Dialect,
    ) -> PipelineResult<VersionIdentifier> {
        let raw = document
            .string_field(dialect.version_field())
            .map_err(|e| ValidationError::MissingVersion {
                dialect,
                reason: e.to_string(),
            })?;

        let version = match dialect {
            Dialect::CycloneDx => VersionIdentifier::new(raw),
            Dialect::Spdx => Self::split_spdx_version(raw)?,
        };

        tracing::debug!(%dialect, %version, "SBOM version detected");
        Ok(version)
    }

    /// Splits `SPDX-2.3` into `2.3`
    ///
    /// Only the first hyphen is a delimiter; the remainder is kept verbatim,
    /// so `SPDX-2.3-extra` yields `2.3-extra`.
    pub fn split_spdx_version(spdx_version: &str) -> PipelineResult<VersionIdentifier> {
        match spdx_version.split_once('-') {
            Some((_, version)) if !version.is_empty() => Ok(VersionIdentifier::new(version)),
            _ => Err(ValidationError::MissingVersion {
                dialect: Dialect::Spdx,
                reason: format!("invalid SPDX version format: {}", spdx_version),
            }),
        }
    }
}
