use crate::shared::Result;
use std::path::Path;

/// RecordReader port for loading declarative part/profile files
///
/// This port abstracts the file system so use cases can be fed records
/// from memory in tests.
pub trait RecordReader {
    /// Reads the raw YAML text of a record file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The path does not carry a .yml/.yaml extension
    /// - The file does not exist, is not a regular file, or is too large
    /// - The file cannot be read
    fn read_record(&self, path: &Path) -> Result<String>;
}
