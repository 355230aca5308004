use sbom_validator::prelude::*;
use std::path::Path;

/// Mock SbomReader for testing
#[allow(dead_code)]
pub struct MockSbomReader {
    pub content: Vec<u8>,
    pub should_fail: bool,
}

#[allow(dead_code)]
impl MockSbomReader {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: Vec::new(),
            should_fail: true,
        }
    }
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, _path: &Path) -> Result<Vec<u8>> {
        if self.should_fail {
            anyhow::bail!("Mock SBOM read failure");
        }
        Ok(self.content.clone())
    }
}
