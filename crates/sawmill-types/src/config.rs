//! Configuration record for the logging pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::level::LogLevel;

/// Logging configuration, deserialized from a YAML document.
///
/// Every field carries a serde default, so a partial document yields the
/// zero values (empty path, 0, false, console format) rather than a parse
/// error. The record is populated once at startup and read-only after.
///
/// ```yaml
/// filename: ./app.log
/// maxsize: 10        # megabytes per file before rotation
/// maxbackups: 3      # rotated files to retain
/// maxage: 7          # days before rotated files are deleted
/// compress: false    # gzip rotated files
/// loglevel: warn
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Path of the actively written log file
    #[serde(default)]
    pub filename: PathBuf,

    /// Size threshold per file, in megabytes, before rotation
    #[serde(default, rename = "maxsize")]
    pub max_size: u64,

    /// Number of rotated files to retain
    #[serde(default, rename = "maxbackups")]
    pub max_backups: u64,

    /// Retention age for rotated files, in days (0 keeps them forever)
    #[serde(default, rename = "maxage")]
    pub max_age: u64,

    /// Whether rotated files are gzip-compressed
    #[serde(default)]
    pub compress: bool,

    /// Requested severity threshold, kept verbatim as configured
    #[serde(default, rename = "loglevel")]
    pub log_level: String,

    /// Output encoding for log entries
    #[serde(default)]
    pub format: LogFormat,
}

impl LogConfig {
    /// The severity threshold this configuration resolves to.
    ///
    /// Unrecognized or absent `loglevel` values resolve to
    /// [`LogLevel::Info`]; see [`LogLevel::from_config`].
    pub fn level(&self) -> LogLevel {
        LogLevel::from_config(&self.log_level)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line format
    Console,
    /// JSON format for machine parsing
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        LogFormat::Console
    }
}
