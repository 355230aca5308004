mod format_classifier;
mod schema_resolver;
mod structural_validator;
mod version_extractor;

pub use format_classifier::FormatClassifier;
pub use schema_resolver::SchemaResolver;
pub use structural_validator::StructuralValidator;
pub use version_extractor::VersionExtractor;
