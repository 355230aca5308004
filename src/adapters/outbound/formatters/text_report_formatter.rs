use crate::application::dto::ValidationReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Number of violations listed before the remainder is summarized
pub const DEFAULT_MAX_VIOLATIONS: usize = 10;

/// TextReportFormatter adapter for human-readable reports
///
/// Lists at most `max_violations` violations, followed by a count of
/// the ones left out. The verdict itself is unaffected by the limit.
pub struct TextReportFormatter {
    max_violations: usize,
}

impl TextReportFormatter {
    pub fn new() -> Self {
        Self::with_max_violations(DEFAULT_MAX_VIOLATIONS)
    }

    pub fn with_max_violations(max_violations: usize) -> Self {
        Self { max_violations }
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "Detected SBOM type: {}", report.dialect)?;
        writeln!(output, "Version: {}", report.version)?;
        writeln!(output, "Schema: {}", report.schema)?;

        if report.is_valid() {
            writeln!(output, "✅ SBOM is valid")?;
            return Ok(output);
        }

        let violations = report.result.violations();
        writeln!(
            output,
            "❌ SBOM is invalid ({} error{}):",
            violations.len(),
            if violations.len() == 1 { "" } else { "s" }
        )?;
        for violation in violations.iter().take(self.max_violations) {
            writeln!(output, "  - {}", violation)?;
        }
        if violations.len() > self.max_violations {
            writeln!(
                output,
                "...and {} more errors.",
                violations.len() - self.max_violations
            )?;
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_validation::domain::{
        Dialect, SchemaKey, ValidationResult, Violation, VersionIdentifier,
    };

    fn report(violation_count: usize) -> ValidationReport {
        let violations = (0..violation_count)
            .map(|i| {
                Violation::new(
                    format!("/components/{}", i),
                    "/properties/components/items/required",
                    "\"name\" is a required property",
                )
            })
            .collect();
        ValidationReport::new(
            Dialect::CycloneDx,
            VersionIdentifier::new("1.4"),
            SchemaKey::new(Dialect::CycloneDx, VersionIdentifier::new("1.4")),
            ValidationResult::new(violations),
        )
    }

    #[test]
    fn test_valid_report() {
        let output = TextReportFormatter::new().format(&report(0)).unwrap();

        assert!(output.contains("Detected SBOM type: CycloneDX"));
        assert!(output.contains("Version: 1.4"));
        assert!(output.contains("Schema: cyclonedx/bom-1.4.schema.json"));
        assert!(output.contains("✅ SBOM is valid"));
        assert!(!output.contains("❌"));
    }

    #[test]
    fn test_invalid_report_lists_violations() {
        let output = TextReportFormatter::new().format(&report(2)).unwrap();

        assert!(output.contains("❌ SBOM is invalid (2 errors):"));
        assert!(output.contains(
            "  - /components/0 [required]: \"name\" is a required property"
        ));
        assert!(output.contains("  - /components/1 [required]"));
        assert!(!output.contains("more errors"));
    }

    #[test]
    fn test_single_violation_wording() {
        let output = TextReportFormatter::new().format(&report(1)).unwrap();
        assert!(output.contains("❌ SBOM is invalid (1 error):"));
    }

    #[test]
    fn test_violations_beyond_limit_are_summarized() {
        let output = TextReportFormatter::new().format(&report(13)).unwrap();

        assert!(output.contains("/components/9 [required]"));
        assert!(!output.contains("/components/10 [required]"));
        assert!(output.contains("...and 3 more errors."));
    }

    #[test]
    fn test_custom_limit() {
        let output = TextReportFormatter::with_max_violations(1)
            .format(&report(3))
            .unwrap();

        assert_eq!(output.matches("  - ").count(), 1);
        assert!(output.contains("...and 2 more errors."));
    }
}
