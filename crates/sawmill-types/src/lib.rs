//! # Sawmill Types
//!
//! Configuration record, severity levels, and error types shared across
//! the sawmill crates.
//!
//! This crate provides the building blocks of the logging setup:
//!
//! - [`LogConfig`], the YAML-backed configuration record
//! - [`LogLevel`], the severity enumeration with strict and lenient parsing
//! - [`SawmillError`] and the [`Result`] alias
//!
//! ## Example
//!
//! ```
//! use sawmill_types::{LogConfig, LogLevel};
//!
//! let config: LogConfig = serde_yaml::from_str(
//!     "filename: ./app.log\nmaxsize: 10\nloglevel: warn\n",
//! ).unwrap();
//!
//! assert_eq!(config.max_size, 10);
//! assert_eq!(config.level(), LogLevel::Warn);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod errors;
pub mod level;

// Re-export common types for convenience
pub use config::{LogConfig, LogFormat};
pub use errors::{Result, SawmillError};
pub use level::LogLevel;
