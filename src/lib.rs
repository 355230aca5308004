//! sbom-validator - structural validation of CycloneDX and SPDX JSON SBOMs
//!
//! This library classifies a JSON document as a known SBOM dialect, extracts
//! its schema version, resolves the matching JSON Schema (draft-07) from a
//! versioned corpus and reports every structural violation. It follows the
//! hexagonal architecture used throughout the crate.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_validation`): Domain types and pure pipeline services
//! - **Application Layer** (`application`): Use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Schema repositories, file system, formatters
//! - **Shared** (`shared`): Error types, result aliases and security helpers
//!
//! # Example
//!
//! ```
//! let sbom = br#"{
//!     "bomFormat": "CycloneDX",
//!     "specVersion": "1.5",
//!     "version": 1,
//!     "components": [{ "type": "library", "name": "serde" }]
//! }"#;
//!
//! let result = sbom_validator::validate(sbom)?;
//! assert!(result.is_valid());
//! # Ok::<(), sbom_validator::shared::error::ValidationError>(())
//! ```
//!
//! The free functions use the embedded schema corpus. To validate against
//! another corpus, inject a repository into the use case:
//!
//! ```no_run
//! use sbom_validator::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let repository = CachingSchemaRepository::new(DirectorySchemaRepository::load("./schemas")?);
//! let use_case = ValidateSbomUseCase::new(repository);
//!
//! let sbom = FileSystemReader::new().read_sbom(std::path::Path::new("bom.json"))?;
//! let report = use_case.execute(&sbom)?;
//! println!("{}", TextReportFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_validation;
pub mod shared;

use adapters::outbound::schemas::EmbeddedSchemaRepository;
use application::use_cases::ValidateSbomUseCase;
use ports::inbound::SbomValidationPort;
use sbom_validation::domain::{
    Dialect, ParsedDocument, SchemaDocument, ValidationResult, VersionIdentifier,
};
use shared::PipelineResult;

fn embedded() -> ValidateSbomUseCase<EmbeddedSchemaRepository> {
    ValidateSbomUseCase::new(EmbeddedSchemaRepository::new())
}

/// Validates a raw SBOM against the embedded schema corpus
///
/// # Errors
/// `UnsupportedFileFormat` if `sbom` is not JSON; otherwise the error of
/// the first pipeline stage that fails. A document that violates its
/// schema is not an error.
pub fn validate(sbom: &[u8]) -> PipelineResult<ValidationResult> {
    embedded().validate(sbom)
}

/// Classifies JSON text as a known SBOM dialect
pub fn detect_format(json: &str) -> PipelineResult<Dialect> {
    embedded().detect_format(&ParsedDocument::parse(json)?)
}

/// Extracts the schema version of JSON text already classified as `dialect`
pub fn extract_version(json: &str, dialect: Dialect) -> PipelineResult<VersionIdentifier> {
    embedded().extract_version(&ParsedDocument::parse(json)?, dialect)
}

/// Resolves `(dialect, version)` against the embedded corpus
pub fn resolve_schema(version: &VersionIdentifier, dialect: Dialect) -> PipelineResult<SchemaDocument> {
    embedded().resolve_schema(version, dialect)
}

/// Validates JSON text against `schema`, collecting every violation
pub fn validate_against_schema(schema: &SchemaDocument, json: &str) -> PipelineResult<ValidationResult> {
    embedded().validate_against_schema(schema, json)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
    pub use crate::adapters::outbound::schemas::{
        CachingSchemaRepository, DirectorySchemaRepository, EmbeddedSchemaRepository,
        InMemorySchemaRepository,
    };
    pub use crate::application::dto::{ReportFormat, ValidationReport};
    pub use crate::application::use_cases::ValidateSbomUseCase;
    pub use crate::ports::inbound::SbomValidationPort;
    pub use crate::ports::outbound::{
        OutputPresenter, ReportFormatter, SbomReader, SchemaRepository,
    };
    pub use crate::sbom_validation::domain::{
        Dialect, ParsedDocument, SchemaDocument, SchemaKey, ValidationResult, VersionIdentifier,
        Violation,
    };
    pub use crate::shared::error::{ErrorKind, ValidationError};
    pub use crate::shared::{PipelineResult, Result};
}
