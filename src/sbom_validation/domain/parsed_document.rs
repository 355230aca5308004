use crate::shared::error::ValidationError;
use crate::shared::PipelineResult;
use serde_json::Value;
use thiserror::Error;

/// Outcome of a checked field lookup that did not yield the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field \"{field}\" is missing")]
    Missing { field: String },

    #[error("field \"{field}\" is not a {expected} (found {found})")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// A syntactically valid JSON document.
///
/// Wraps the generic value tree and only offers narrowing accessors that
/// report whether a field is absent or present with the wrong type.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    root: Value,
}

impl ParsedDocument {
    /// Parses JSON text. Any top-level JSON value is accepted; documents
    /// that are not objects simply have no fields.
    pub fn parse(text: &str) -> PipelineResult<Self> {
        let root = serde_json::from_str(text).map_err(|e| ValidationError::MalformedJson {
            reason: e.to_string(),
        })?;
        Ok(Self { root })
    }

    pub fn from_slice(bytes: &[u8]) -> PipelineResult<Self> {
        let root = serde_json::from_slice(bytes).map_err(|e| ValidationError::MalformedJson {
            reason: e.to_string(),
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Returns a top-level string field.
    pub fn string_field(&self, field: &str) -> Result<&str, FieldError> {
        match self.root.get(field) {
            None => Err(FieldError::Missing {
                field: field.to_string(),
            }),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(other) => Err(FieldError::TypeMismatch {
                field: field.to_string(),
                expected: "string",
                found: json_type_name(other),
            }),
        }
    }

    /// True when `field` exists at the top level and holds a string.
    pub fn has_string_field(&self, field: &str) -> bool {
        self.string_field(field).is_ok()
    }
}

impl From<Value> for ParsedDocument {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
