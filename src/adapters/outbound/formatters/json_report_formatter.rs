use crate::application::dto::ValidationReport;
use crate::ports::outbound::ReportFormatter;
use crate::sbom_validation::domain::{Dialect, SchemaKey, Violation, VersionIdentifier};
use crate::shared::Result;
use serde::Serialize;

/// Serialized shape of a validation report
#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    dialect: Dialect,
    version: &'a VersionIdentifier,
    schema: &'a SchemaKey,
    violations: &'a [Violation],
}

impl<'a> From<&'a ValidationReport> for JsonReport<'a> {
    fn from(report: &'a ValidationReport) -> Self {
        Self {
            valid: report.is_valid(),
            dialect: report.dialect,
            version: &report.version,
            schema: &report.schema,
            violations: report.result.violations(),
        }
    }
}

/// JsonReportFormatter adapter for machine-readable reports
///
/// Emits every violation regardless of any display limit.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        let mut json = serde_json::to_string_pretty(&JsonReport::from(report))?;
        json.push('\n');
        Ok(json)
    }
}
