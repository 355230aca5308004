use crate::shared::Result;
use std::path::Path;

/// SbomReader port for loading SBOM bytes
///
/// This port abstracts the file system operations needed to load the
/// document handed to the validation pipeline.
pub trait SbomReader {
    /// Reads the SBOM at `path`
    ///
    /// # Returns
    /// The raw bytes; no decoding or JSON parsing is performed here
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file is a symbolic link or exceeds the size limit
    /// - The file cannot be read due to permissions or I/O errors
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>>;
}
