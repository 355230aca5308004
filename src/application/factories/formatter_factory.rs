use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
use crate::application::dto::ReportFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for the different formatter
/// implementations. It belongs in the application layer as it selects
/// infrastructure adapters based on application settings.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified report format
    ///
    /// # Arguments
    /// * `format` - The report format to create a formatter for
    /// * `max_violations` - Violation display limit; only the text format uses it
    ///
    /// # Examples
    /// ```
    /// use sbom_validator::application::dto::ReportFormat;
    /// use sbom_validator::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(ReportFormat::Json, 10);
    /// ```
    pub fn create(format: ReportFormat, max_violations: usize) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::Text => Box::new(TextReportFormatter::with_max_violations(max_violations)),
            ReportFormat::Json => Box::new(JsonReportFormatter::new()),
        }
    }
}
