use super::error::CatalogError;

/// Type alias for Result with anyhow::Error as the error type.
/// Used by use cases and the binary, where errors gain human context.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Result of the resolution and record-mapping core, which reports the
/// typed error taxonomy directly.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
