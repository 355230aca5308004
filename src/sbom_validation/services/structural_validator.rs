use crate::ports::outbound::SchemaRepository;
use crate::sbom_validation::domain::{Dialect, SchemaDocument, ValidationResult, Violation};
use crate::shared::error::ValidationError;
use crate::shared::PipelineResult;
use jsonschema::{Draft, Retrieve, Uri, Validator};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Meta-schema hosts; references to them are resolved by the engine itself.
const META_SCHEMA_PREFIXES: [&str; 2] = ["http://json-schema.org/", "https://json-schema.org/"];

/// Resolves `$ref` URIs to companion documents fetched from the schema
/// repository before compilation. Never touches the network.
struct CorpusRetriever {
    /// Map from file name to parsed companion document.
    documents: BTreeMap<String, Value>,
}

impl Retrieve for CorpusRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let file_name = reference_file_name(uri.as_str());
        self.documents
            .get(file_name)
            .cloned()
            .ok_or_else(|| format!("schema reference '{}' is not available locally", uri.as_str()).into())
    }
}

/// StructuralValidator service for JSON Schema (draft-07) evaluation
///
/// Evaluation is delegated to the `jsonschema` crate. Every violation in
/// the document tree is collected, in the engine's traversal order.
pub struct StructuralValidator;

impl StructuralValidator {
    /// Validates raw JSON text against `schema`
    ///
    /// Companion documents referenced by the schema are looked up in the
    /// dialect namespace of `repository`.
    ///
    /// # Errors
    /// - `MalformedJson` if `sbom` is not valid JSON (checked first)
    /// - `InvalidSchema` if the schema is not JSON, does not compile, or
    ///   references a document the repository does not have
    pub fn validate<R: SchemaRepository + ?Sized>(
        repository: &R,
        schema: &SchemaDocument,
        sbom: &str,
    ) -> PipelineResult<ValidationResult> {
        let instance: Value =
            serde_json::from_str(sbom).map_err(|e| ValidationError::MalformedJson {
                reason: e.to_string(),
            })?;

        Self::validate_document(repository, schema, &instance)
    }

    /// Validates an already parsed document against `schema`
    ///
    /// # Errors
    /// `InvalidSchema` under the same conditions as [`Self::validate`]
    pub fn validate_document<R: SchemaRepository + ?Sized>(
        repository: &R,
        schema: &SchemaDocument,
        instance: &Value,
    ) -> PipelineResult<ValidationResult> {
        let validator = Self::compile(repository, schema)?;

        let violations: Vec<Violation> = validator
            .iter_errors(instance)
            .map(|e| {
                Violation::new(
                    e.instance_path.to_string(),
                    e.schema_path.to_string(),
                    e.to_string(),
                )
            })
            .collect();

        tracing::debug!(
            schema = %schema.key(),
            violations = violations.len(),
            "structural validation finished"
        );
        Ok(ValidationResult::new(violations))
    }

    /// Compiles `schema` as draft-07 with all companions registered.
    fn compile<R: SchemaRepository + ?Sized>(
        repository: &R,
        schema: &SchemaDocument,
    ) -> PipelineResult<Validator> {
        let invalid = |reason: String| ValidationError::InvalidSchema {
            key: schema.key().clone(),
            reason,
        };

        let schema_value: Value =
            serde_json::from_str(schema.as_str()).map_err(|e| invalid(e.to_string()))?;

        let documents = Self::load_companions(repository, schema.dialect(), &schema_value)
            .map_err(invalid)?;

        let mut options = jsonschema::options();
        options.with_draft(Draft::Draft7);
        options.with_retriever(CorpusRetriever { documents });
        options
            .build(&schema_value)
            .map_err(|e| invalid(e.to_string()))
    }

    /// Transitively fetches every external document referenced by `root`.
    fn load_companions<R: SchemaRepository + ?Sized>(
        repository: &R,
        dialect: Dialect,
        root: &Value,
    ) -> Result<BTreeMap<String, Value>, String> {
        let mut documents = BTreeMap::new();
        let mut pending: Vec<String> = external_references(root).into_iter().collect();

        while let Some(file_name) = pending.pop() {
            if documents.contains_key(&file_name) {
                continue;
            }
            let content = repository
                .fetch_document(dialect, &file_name)
                .ok_or_else(|| {
                    format!(
                        "referenced schema '{}/{}' is not available",
                        dialect.namespace(),
                        file_name
                    )
                })?;
            let value: Value = serde_json::from_str(&content)
                .map_err(|e| format!("referenced schema '{}' is not valid JSON: {}", file_name, e))?;
            pending.extend(external_references(&value));
            documents.insert(file_name, value);
        }

        Ok(documents)
    }
}

/// File names of all non-local `$ref` targets in `value`.
fn external_references(value: &Value) -> BTreeSet<String> {
    let mut references = BTreeSet::new();
    collect_references(value, &mut references);
    references
}

fn collect_references(value: &Value, references: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                match (key.as_str(), child) {
                    ("$ref", Value::String(reference)) => {
                        if is_external_reference(reference) {
                            references.insert(reference_file_name(reference).to_string());
                        }
                    }
                    _ => collect_references(child, references),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_references(item, references);
            }
        }
        _ => {}
    }
}

fn is_external_reference(reference: &str) -> bool {
    !reference.is_empty()
        && !reference.starts_with('#')
        && !META_SCHEMA_PREFIXES
            .iter()
            .any(|prefix| reference.starts_with(prefix))
}

/// `http://cyclonedx.org/schema/spdx.schema.json#/x` -> `spdx.schema.json`
fn reference_file_name(reference: &str) -> &str {
    let without_fragment = reference.split('#').next().unwrap_or(reference);
    without_fragment
        .rsplit('/')
        .next()
        .unwrap_or(without_fragment)
}
