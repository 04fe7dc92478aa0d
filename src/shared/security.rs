use crate::shared::error::CatalogError;
use crate::shared::CatalogResult;
use std::fs;
use std::path::Path;

/// Maximum size of a declarative record file (10 MB)
pub const MAX_RECORD_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum size of an archive accepted for upload (4 GB)
pub const MAX_ARCHIVE_SIZE: u64 = 4 * 1024 * 1024 * 1024;

const RECORD_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Validates that a declarative record path carries a YAML extension.
///
/// Extension matching is case-insensitive (`PART.YML` is accepted).
pub fn validate_record_extension(path: &Path) -> CatalogResult<()> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            RECORD_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false);

    if !accepted {
        return Err(CatalogError::UnsupportedRecordFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
/// and that its size is within `max_size`.
///
/// # Security
/// `symlink_metadata()` is used so the link itself is inspected, not its target.
///
/// # Errors
/// Returns `FileReadError` if:
/// - The path doesn't exist or its metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn validate_regular_file(path: &Path, max_size: u64) -> CatalogResult<u64> {
    let read_error = |details: String| CatalogError::FileReadError {
        path: path.to_path_buf(),
        details,
    };

    let metadata = fs::symlink_metadata(path)
        .map_err(|e| read_error(format!("Failed to read metadata: {}", e)))?;

    if metadata.is_symlink() {
        return Err(read_error(
            "Security: path is a symbolic link. For security reasons, symbolic links are not allowed."
                .to_string(),
        ));
    }

    if !metadata.is_file() {
        return Err(read_error("not a regular file".to_string()));
    }

    let file_size = metadata.len();
    if file_size > max_size {
        return Err(read_error(format!(
            "Security: file is too large ({} bytes). Maximum allowed size is {} bytes.",
            file_size, max_size
        )));
    }

    Ok(file_size)
}
