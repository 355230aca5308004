use serde::Serialize;
use std::fmt;

/// One mismatch between a document and a schema constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// JSON Pointer to the offending value in the document.
    pub instance_path: String,
    /// JSON Pointer to the failing keyword in the schema.
    pub schema_path: String,
    /// The schema keyword that failed (`required`, `type`, `enum`, ...).
    pub keyword: String,
    /// Human-readable description including expected vs. actual.
    pub message: String,
}

impl Violation {
    pub fn new(
        instance_path: impl Into<String>,
        schema_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let schema_path = schema_path.into();
        let keyword = keyword_from_schema_path(&schema_path).to_string();
        Self {
            instance_path: instance_path.into(),
            schema_path,
            keyword,
            message: message.into(),
        }
    }

    /// Instance location for display; the document root renders as `(root)`.
    pub fn location(&self) -> &str {
        if self.instance_path.is_empty() {
            "(root)"
        } else {
            &self.instance_path
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.location(), self.keyword, self.message)
    }
}

/// Last non-index segment of a schema pointer, i.e. the keyword that
/// produced the error. `/properties/components/items/required` -> `required`.
pub(crate) fn keyword_from_schema_path(schema_path: &str) -> &str {
    schema_path
        .rsplit('/')
        .find(|segment| !segment.is_empty() && segment.parse::<usize>().is_err())
        .unwrap_or("schema")
}

/// Outcome of a successful structural validation.
///
/// The document is valid exactly when no violations were collected.
/// Violations keep the evaluation order and are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn valid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations rendered as display strings, in evaluation order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}
