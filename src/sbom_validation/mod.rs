/// SBOM validation domain layer
///
/// Holds the value types of the validation pipeline and the pure services
/// that classify a document, extract its version and evaluate it against
/// a schema. Nothing in this layer performs I/O.
pub mod domain;
pub mod services;
