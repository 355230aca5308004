pub mod dialect;
pub mod parsed_document;
pub mod schema_document;
pub mod validation_result;
pub mod version;

pub use dialect::Dialect;
pub use parsed_document::{FieldError, ParsedDocument};
pub use schema_document::{SchemaDocument, SchemaKey};
pub use validation_result::{ValidationResult, Violation};
pub use version::VersionIdentifier;
