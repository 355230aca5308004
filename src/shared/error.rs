use crate::sbom_validation::domain::{Dialect, SchemaKey};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish an invalid SBOM from a
/// run that could not determine validity at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The SBOM conforms to its schema
    Success = 0,
    /// The SBOM was checked and has schema violations
    ValidationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Validity could not be determined (I/O, unknown format, missing schema, ...)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ValidationFailed => write!(f, "Validation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Coarse classification of [`ValidationError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedJson,
    UnknownFormat,
    MissingVersion,
    UnsupportedDialect,
    SchemaNotFound,
    InvalidSchema,
}

/// Failures of the validation pipeline.
///
/// Each variant means validity could not be determined. A document that
/// merely violates its schema is not an error; see
/// [`ValidationResult`](crate::sbom_validation::domain::ValidationResult).
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Unsupported file format: {reason}\n\n💡 Hint: Only JSON-serialized SBOMs can be validated")]
    UnsupportedFileFormat { reason: String },

    #[error("Invalid JSON format: {reason}")]
    MalformedJson { reason: String },

    #[error("Unknown SBOM type: neither a \"bomFormat\" nor a \"spdxVersion\" string field was found\n\n💡 Hint: Only CycloneDX and SPDX JSON documents are recognized")]
    UnknownFormat,

    #[error("Failed to extract {dialect} version: {reason}")]
    MissingVersion { dialect: Dialect, reason: String },

    #[error("Unsupported SBOM type: no {dialect} schemas are available for validation")]
    UnsupportedDialect { dialect: Dialect },

    #[error("Schema not found: {key}\n\n💡 Hint: Available {dialect} versions: {versions}", dialect = .key.dialect(), versions = format_available(.available))]
    SchemaNotFound {
        key: SchemaKey,
        available: Vec<String>,
    },

    #[error("Invalid schema format in {key}: {reason}")]
    InvalidSchema { key: SchemaKey, reason: String },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::UnsupportedFileFormat { .. } | ValidationError::MalformedJson { .. } => {
                ErrorKind::MalformedJson
            }
            ValidationError::UnknownFormat => ErrorKind::UnknownFormat,
            ValidationError::MissingVersion { .. } => ErrorKind::MissingVersion,
            ValidationError::UnsupportedDialect { .. } => ErrorKind::UnsupportedDialect,
            ValidationError::SchemaNotFound { .. } => ErrorKind::SchemaNotFound,
            ValidationError::InvalidSchema { .. } => ErrorKind::InvalidSchema,
        }
    }
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}

/// Errors raised by the filesystem adapters.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to load schema directory: {path}\nDetails: {details}\n\n💡 Hint: The directory must contain a cyclonedx/ and/or spdx/ subdirectory of *.json schemas")]
    SchemaDirectoryError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
