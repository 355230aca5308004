use crate::ports::outbound::SbomReader;
use crate::shared::error::SbomError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading SBOM files from the file system
///
/// This adapter implements the SbomReader port. Files are returned as raw
/// bytes; decoding and JSON parsing belong to the validation pipeline.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    /// Creates a reader with a custom size limit
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemReader {
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>> {
        let metadata = validate_regular_file(path, "SBOM file")?;
        validate_file_size(metadata.len(), path, self.max_file_size)?;

        let bytes = fs::read(path).map_err(|e| SbomError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "SBOM file read");
        Ok(bytes)
    }
}
