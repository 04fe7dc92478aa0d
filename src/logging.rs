//! Log setup: JSON lines in the configured log file, plus a readable stderr
//! copy with `--verbose`.

use crate::config::Config;
use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::fs::File;
use std::sync::Mutex;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Installs the subscriber for the current thread
///
/// The log file is truncated. Events are recorded until the returned guard
/// is dropped; no process-wide subscriber is set.
///
/// # Errors
/// Returns `FileWriteError` if the log file cannot be created
pub fn init(config: &Config, verbose: bool) -> Result<DefaultGuard> {
    let file = File::create(&config.log_file).map_err(|e| CatalogError::FileWriteError {
        path: config.log_file.clone(),
        details: e.to_string(),
    })?;

    let with_source = config.log_level.includes_source();
    let file_layer = fmt::layer()
        .json()
        .with_writer(Mutex::new(file))
        .with_target(false)
        .with_file(with_source)
        .with_line_number(with_source);

    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let subscriber = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .with(LevelFilter::DEBUG);

    let guard = tracing::subscriber::set_default(subscriber);
    tracing::debug!(
        log_level = ?config.log_level,
        source_locations = with_source,
        "logging initialized"
    );
    Ok(guard)
}
