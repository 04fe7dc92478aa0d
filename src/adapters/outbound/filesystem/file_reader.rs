use crate::ports::outbound::RecordReader;
use crate::shared::error::CatalogError;
use crate::shared::security::{validate_record_extension, validate_regular_file, MAX_RECORD_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for declarative record files
///
/// Only regular `.yml`/`.yaml` files up to 10 MB are read; symbolic links
/// are refused.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordReader for FileSystemReader {
    fn read_record(&self, path: &Path) -> Result<String> {
        validate_record_extension(path)?;
        validate_regular_file(path, MAX_RECORD_SIZE)?;

        tracing::debug!(path = %path.display(), "reading record file");
        let content = fs::read_to_string(path).map_err(|e| CatalogError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(content)
    }
}
