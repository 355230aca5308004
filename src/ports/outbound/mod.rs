/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (schema corpus, file system, console).
pub mod output_presenter;
pub mod report_formatter;
pub mod sbom_reader;
pub mod schema_repository;

pub use output_presenter::OutputPresenter;
pub use report_formatter::ReportFormatter;
pub use sbom_reader::SbomReader;
pub use schema_repository::SchemaRepository;
