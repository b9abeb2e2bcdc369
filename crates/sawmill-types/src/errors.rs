//! Error types for sawmill operations.

use thiserror::Error;

/// The error type for configuration loading and logger construction.
#[derive(Error, Debug)]
pub enum SawmillError {
    /// The configuration file could not be read
    #[error("failed to read configuration file: {0}")]
    Read(#[from] std::io::Error),

    /// The configuration document could not be parsed
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The logger could not be constructed or installed
    #[error("failed to construct logger: {0}")]
    Construction(String),

    /// A severity name was not recognized
    #[error("unrecognized log level '{0}'")]
    Level(String),
}

/// A specialized Result type for sawmill operations.
pub type Result<T> = std::result::Result<T, SawmillError>;
