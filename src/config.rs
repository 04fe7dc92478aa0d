//! Configuration file support for ccli.
//!
//! Provides YAML-based configuration through `ccli_config.yml` files,
//! including the raw file schema, loading and validation into the settings
//! the commands run with.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::formatters::DEFAULT_JSON_INDENT;
use crate::shared::error::CatalogError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "ccli_config.yml";

/// Largest accepted `json_indent`
pub const MAX_JSON_INDENT: i64 = 16;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub server_addr: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<i64>,
    pub json_indent: Option<i64>,
    pub insecure_tls: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Log verbosity from `log_level`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// `1`: debug events
    Debug,
    /// `2`: debug events with source file and line
    DebugWithSource,
}

impl LogLevel {
    pub fn includes_source(self) -> bool {
        matches!(self, LogLevel::DebugWithSource)
    }
}

/// Validated settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server_addr: String,
    pub log_file: PathBuf,
    pub log_level: LogLevel,
    pub json_indent: usize,
    pub insecure_tls: bool,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Create {} next to where you run ccli, or pass --config <path>.",
            path.display(),
            CONFIG_FILENAME
        )
    })?;

    let file: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&file);
    let config = validate_config(file, path)?;
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<Config>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Loads `explicit` if given, otherwise `ccli_config.yml` from the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    let current_dir = std::env::current_dir().context("Failed to determine the current directory")?;
    discover_config(&current_dir)?.ok_or_else(|| {
        anyhow::anyhow!(
            "Config file not found: {}\n\n💡 Hint: Copy ccli_config.DEFAULT.yml to {} and fill in server_addr, or pass --config <path>.",
            current_dir.join(CONFIG_FILENAME).display(),
            CONFIG_FILENAME
        )
    })
}

/// Validate the loaded configuration.
fn validate_config(file: ConfigFile, path: &Path) -> Result<Config> {
    let invalid = |reason: String| CatalogError::ConfigError {
        path: path.to_path_buf(),
        reason,
    };

    let server_addr = file
        .server_addr
        .map(|addr| addr.trim().to_string())
        .filter(|addr| !addr.is_empty())
        .ok_or_else(|| invalid("server_addr is missing".to_string()))?;
    if !(server_addr.starts_with("http://") || server_addr.starts_with("https://")) {
        return Err(invalid(format!(
            "server_addr \"{}\" must be an http:// or https:// URL",
            server_addr
        ))
        .into());
    }

    let log_file = file
        .log_file
        .filter(|log_file| log_file.ends_with(".txt"))
        .ok_or_else(|| invalid("log_file must be a .txt file".to_string()))?;

    let log_level = match file.log_level.unwrap_or(1) {
        1 => LogLevel::Debug,
        2 => LogLevel::DebugWithSource,
        other => {
            return Err(invalid(format!(
                "log_level must be either 1 or 2, got {}",
                other
            ))
            .into())
        }
    };

    let json_indent = match file.json_indent {
        None => DEFAULT_JSON_INDENT,
        Some(width) if (0..=MAX_JSON_INDENT).contains(&width) => width as usize,
        Some(width) => {
            return Err(invalid(format!(
                "json_indent must be between 0 and {}, got {}",
                MAX_JSON_INDENT, width
            ))
            .into())
        }
    };

    Ok(Config {
        server_addr,
        log_file: PathBuf::from(log_file),
        log_level,
        json_indent,
        insecure_tls: file.insecure_tls.unwrap_or(false),
    })
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(file: &ConfigFile) {
    for key in file.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
