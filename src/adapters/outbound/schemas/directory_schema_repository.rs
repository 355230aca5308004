use super::versions_in;
use crate::ports::outbound::SchemaRepository;
use crate::sbom_validation::domain::Dialect;
use crate::shared::error::SbomError;
use crate::shared::security::is_safe_file_name;
use crate::shared::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// DirectorySchemaRepository adapter loading a schema corpus from disk
///
/// Expects one subdirectory per dialect namespace (`cyclonedx/`, `spdx/`)
/// holding `*.json` documents. Everything is read once at construction,
/// so lookups never touch the file system. A dialect is supported when
/// its subdirectory exists.
#[derive(Debug, Clone)]
pub struct DirectorySchemaRepository {
    root: PathBuf,
    documents: HashMap<Dialect, HashMap<String, Arc<str>>>,
}

impl DirectorySchemaRepository {
    /// Loads every `*.json` file below `root/<namespace>/`
    ///
    /// # Errors
    /// Returns an error if `root` is not a directory or a schema file
    /// cannot be read
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(SbomError::SchemaDirectoryError {
                path: root,
                details: "Not a directory".to_string(),
            }
            .into());
        }

        let mut documents = HashMap::new();
        for dialect in Dialect::ALL {
            let namespace_dir = root.join(dialect.namespace());
            if namespace_dir.is_dir() {
                documents.insert(dialect, Self::load_namespace(&namespace_dir)?);
            }
        }

        tracing::debug!(
            root = %root.display(),
            dialects = documents.len(),
            "schema directory loaded"
        );
        Ok(Self { root, documents })
    }

    fn load_namespace(dir: &Path) -> Result<HashMap<String, Arc<str>>> {
        let directory_error = |details: String| SbomError::SchemaDirectoryError {
            path: dir.to_path_buf(),
            details,
        };

        let mut documents = HashMap::new();
        let entries = fs::read_dir(dir).map_err(|e| directory_error(e.to_string()))?;
        for entry in entries {
            let path = entry.map_err(|e| directory_error(e.to_string()))?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.ends_with(".json") || !path.is_file() {
                continue;
            }
            let content = fs::read_to_string(&path)
                .map_err(|e| directory_error(format!("{}: {}", name, e)))?;
            documents.insert(name.to_string(), Arc::from(content));
        }
        Ok(documents)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SchemaRepository for DirectorySchemaRepository {
    fn supports_dialect(&self, dialect: Dialect) -> bool {
        self.documents.contains_key(&dialect)
    }

    fn fetch_document(&self, dialect: Dialect, file_name: &str) -> Option<Arc<str>> {
        if !is_safe_file_name(file_name) {
            tracing::warn!(file_name, "rejected schema lookup outside the schema directory");
            return None;
        }
        self.documents.get(&dialect)?.get(file_name).cloned()
    }

    fn available_versions(&self, dialect: Dialect) -> Vec<String> {
        self.documents
            .get(&dialect)
            .map(|docs| versions_in(dialect, docs.keys().map(String::as_str)))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_validation::domain::SchemaKey;
    use tempfile::TempDir;

    fn write_schema(root: &Path, namespace: &str, name: &str, content: &str) {
        let dir = root.join(namespace);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_cyclonedx_only() {
        let temp_dir = TempDir::new().unwrap();
        let content = r#"{"title": "CycloneDX Schema", "type": "object"}"#;
        write_schema(temp_dir.path(), "cyclonedx", "bom-1.4.schema.json", content);

        let repository = DirectorySchemaRepository::load(temp_dir.path()).unwrap();
        assert!(repository.supports_dialect(Dialect::CycloneDx));
        assert!(!repository.supports_dialect(Dialect::Spdx));

        let key = SchemaKey::new(Dialect::CycloneDx, "1.4".into());
        assert_eq!(repository.fetch_schema(&key).unwrap().as_str(), content);
        assert_eq!(repository.available_versions(Dialect::CycloneDx), vec!["1.4"]);
    }

    #[test]
    fn test_schema_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        write_schema(temp_dir.path(), "cyclonedx", "bom-1.4.schema.json", "{}");

        let repository = DirectorySchemaRepository::load(temp_dir.path()).unwrap();
        let key = SchemaKey::new(Dialect::CycloneDx, "2.0".into());
        assert!(repository.fetch_schema(&key).is_none());
    }

    #[test]
    fn test_spdx_schemas_enable_spdx() {
        let temp_dir = TempDir::new().unwrap();
        write_schema(temp_dir.path(), "spdx", "spdx-2.3.schema.json", "{}");

        let repository = DirectorySchemaRepository::load(temp_dir.path()).unwrap();
        assert!(repository.supports_dialect(Dialect::Spdx));
        assert_eq!(repository.available_versions(Dialect::Spdx), vec!["2.3"]);
    }

    #[test]
    fn test_non_json_files_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        write_schema(temp_dir.path(), "cyclonedx", "README.md", "# schemas");
        write_schema(temp_dir.path(), "cyclonedx", "bom-1.5.schema.json", "{}");

        let repository = DirectorySchemaRepository::load(temp_dir.path()).unwrap();
        assert!(repository
            .fetch_document(Dialect::CycloneDx, "README.md")
            .is_none());
    }

    #[test]
    fn test_path_traversal_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        write_schema(temp_dir.path(), "cyclonedx", "bom-1.4.schema.json", "{}");
        fs::write(temp_dir.path().join("secret.json"), "{}").unwrap();

        let repository = DirectorySchemaRepository::load(temp_dir.path()).unwrap();
        assert!(repository
            .fetch_document(Dialect::CycloneDx, "../secret.json")
            .is_none());
    }

    #[test]
    fn test_invalid_directory() {
        let result = DirectorySchemaRepository::load("/invalid/path");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to load schema directory"));
    }
}
