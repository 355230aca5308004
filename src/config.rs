//! Configuration file support for sbom-validator.
//!
//! Provides YAML-based configuration through `sbom-validator.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-validator.config.yml";

/// Top-level configuration file schema.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Report format (`text` or `json`).
    pub format: Option<String>,
    /// Number of violations listed by the text report.
    pub max_violations: Option<usize>,
    /// Directory corpus used instead of the embedded schemas.
    pub schema_dir: Option<PathBuf>,

    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to null rather than an empty mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    resolve_relative_paths(&mut config, path);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    tracing::debug!(path = %config_path.display(), "config file discovered");
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.max_violations == Some(0) {
        bail!(
            "Invalid config: max_violations must be at least 1.\n\n\
             💡 Hint: Use --format json to see every violation."
        );
    }

    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<crate::application::dto::ReportFormat>() {
            bail!("Invalid config: {}", e);
        }
    }

    Ok(())
}

/// Relative paths in a config file are relative to the file, not to the
/// working directory.
fn resolve_relative_paths(config: &mut ConfigFile, config_path: &Path) {
    let Some(base) = config_path.parent() else {
        return;
    };
    if let Some(dir) = config.schema_dir.as_mut() {
        if dir.is_relative() {
            *dir = base.join(&*dir);
        }
    }
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
    }
}
