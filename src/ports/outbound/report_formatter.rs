use crate::application::dto::ValidationReport;
use crate::shared::Result;

/// ReportFormatter port for rendering validation outcomes
///
/// This port abstracts how a [`ValidationReport`] is shown to the user
/// (plain text, JSON, ...). Formatting is cosmetic and never changes the
/// verdict.
pub trait ReportFormatter {
    /// Renders the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &ValidationReport) -> Result<String>;
}
