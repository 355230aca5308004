use super::versions_in;
use crate::ports::outbound::SchemaRepository;
use crate::sbom_validation::domain::Dialect;
use std::sync::Arc;

macro_rules! corpus_entry {
    ($namespace:literal, $file:literal) => {
        (
            $file,
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/schemas/",
                $namespace,
                "/",
                $file
            )),
        )
    };
}

/// CycloneDX schemas compiled into the binary, including the companion
/// documents they reference.
const CYCLONEDX_CORPUS: &[(&str, &str)] = &[
    corpus_entry!("cyclonedx", "bom-1.2.schema.json"),
    corpus_entry!("cyclonedx", "bom-1.3.schema.json"),
    corpus_entry!("cyclonedx", "bom-1.4.schema.json"),
    corpus_entry!("cyclonedx", "bom-1.5.schema.json"),
    corpus_entry!("cyclonedx", "bom-1.6.schema.json"),
    corpus_entry!("cyclonedx", "spdx.schema.json"),
    corpus_entry!("cyclonedx", "jsf-0.82.schema.json"),
];

/// SPDX schemas are not bundled.
const SPDX_CORPUS: &[(&str, &str)] = &[];

/// EmbeddedSchemaRepository adapter serving the build-time schema corpus
///
/// The corpus is fixed when the crate is compiled and is never modified.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSchemaRepository;

impl EmbeddedSchemaRepository {
    pub fn new() -> Self {
        Self
    }

    fn corpus(dialect: Dialect) -> &'static [(&'static str, &'static str)] {
        match dialect {
            Dialect::CycloneDx => CYCLONEDX_CORPUS,
            Dialect::Spdx => SPDX_CORPUS,
        }
    }
}

impl SchemaRepository for EmbeddedSchemaRepository {
    fn supports_dialect(&self, dialect: Dialect) -> bool {
        !Self::corpus(dialect).is_empty()
    }

    fn fetch_document(&self, dialect: Dialect, file_name: &str) -> Option<Arc<str>> {
        Self::corpus(dialect)
            .iter()
            .find(|(name, _)| *name == file_name)
            .map(|(_, content)| Arc::from(*content))
    }

    fn available_versions(&self, dialect: Dialect) -> Vec<String> {
        versions_in(dialect, Self::corpus(dialect).iter().map(|(name, _)| *name))
    }
}
