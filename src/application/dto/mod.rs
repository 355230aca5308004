/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod report_format;
mod validation_report;

pub use report_format::ReportFormat;
pub use validation_report::ValidationReport;
