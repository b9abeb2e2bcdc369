//! Severity levels for the logging pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, SawmillError};

/// Severity threshold for the logging pipeline.
///
/// Ordered from most to least verbose: an entry is emitted when its
/// severity is at or above the configured threshold.
///
/// # Example
///
/// ```
/// use sawmill_types::LogLevel;
///
/// let level: LogLevel = "warn".parse().unwrap();
/// assert_eq!(level, LogLevel::Warn);
///
/// // Strict parsing rejects typos; the configuration path is lenient.
/// assert!("warning".parse::<LogLevel>().is_err());
/// assert_eq!(LogLevel::from_config("warning"), LogLevel::Info);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Diagnostic detail for development
    Debug,
    /// Routine operational messages
    Info,
    /// Unexpected conditions the process can absorb
    Warn,
    /// Failed operations
    Error,
    /// Conditions the process cannot continue from
    Fatal,
}

impl LogLevel {
    /// Resolve a configured level string, falling back to `Info`.
    ///
    /// This is the total conversion used for configuration files: any
    /// unrecognized value, including the empty string an absent field
    /// leaves behind, resolves to `Info` instead of failing
    /// initialization. Use [`FromStr`] when a typo should be an error.
    pub fn from_config(s: &str) -> Self {
        s.parse().unwrap_or(LogLevel::Info)
    }

    /// The lowercase name of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }
}

impl FromStr for LogLevel {
    type Err = SawmillError;

    // Exact match only: severity names are lowercase in configuration.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(SawmillError::Level(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parsing() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert_eq!("fatal".parse::<LogLevel>().unwrap(), LogLevel::Fatal);

        assert!("WARN".parse::<LogLevel>().is_err());
        assert!("warning".parse::<LogLevel>().is_err());
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_lenient_parsing_defaults_to_info() {
        assert_eq!(LogLevel::from_config("error"), LogLevel::Error);
        assert_eq!(LogLevel::from_config("verbose"), LogLevel::Info);
        assert_eq!(LogLevel::from_config("INFO"), LogLevel::Info);
        assert_eq!(LogLevel::from_config(""), LogLevel::Info);
    }

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Fatal.to_string(), "fatal");
    }
}
