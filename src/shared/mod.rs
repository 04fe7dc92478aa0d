/// Shared error and result types used across all layers
pub mod error;
pub mod result;
pub mod security;

pub use error::{CatalogError, ExitCode};
pub use result::{CatalogResult, Result};
