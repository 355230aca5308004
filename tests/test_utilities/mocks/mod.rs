/// Mock implementations for testing
mod mock_sbom_reader;
mod mock_schema_repository;

#[allow(unused_imports)]
pub use mock_sbom_reader::MockSbomReader;
#[allow(unused_imports)]
pub use mock_schema_repository::MockSchemaRepository;
