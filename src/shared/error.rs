use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed error used as the preserved cause of a failed remote call.
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Application error (remote call, resolution, file I/O, configuration, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Errors raised while resolving identifiers, mapping records and talking
/// to the catalog.
///
/// Every variant carries the input value that caused it, because a typo in a
/// hash or verification code is the most common failure and there is no retry.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No part identifier given for {operation}\n\n💡 Hint: Set one of catalog_id, sha256 or fvc in the record")]
    MissingIdentifier { operation: String },

    #[error("Invalid {field} reference: \"{value}\"\nReason: {reason}")]
    InvalidReference {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No part found for {lookup} \"{value}\"\n\n💡 Hint: Check the value for typos, or upload the archive first")]
    NotFound { lookup: String, value: String },

    #[error("Remote call {operation} failed for {subject}")]
    RemoteCallFailed {
        operation: String,
        subject: String,
        #[source]
        source: BoxedSource,
    },

    #[error("Malformed record: {origin}\nDetails: {details}")]
    MalformedRecord { origin: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Unsupported record file: {path}\n\n💡 Hint: Records must be YAML files with a .yml or .yaml extension")]
    UnsupportedRecordFile { path: PathBuf },

    #[error("Invalid configuration: {path}\nReason: {reason}")]
    ConfigError { path: PathBuf, reason: String },
}

impl CatalogError {
    /// Wraps any transport or schema-level error with the operation name and
    /// the input value it was issued for.
    pub fn remote(
        operation: impl Into<String>,
        subject: impl Into<String>,
        source: anyhow::Error,
    ) -> Self {
        CatalogError::RemoteCallFailed {
            operation: operation.into(),
            subject: subject.into(),
            source: source.into(),
        }
    }

    pub fn malformed(origin: impl Into<String>, details: impl fmt::Display) -> Self {
        CatalogError::MalformedRecord {
            origin: origin.into(),
            details: details.to_string(),
        }
    }
}
