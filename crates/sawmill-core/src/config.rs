//! Loading of the logging configuration from disk.

use sawmill_types::{LogConfig, Result};
use std::fs;
use std::path::Path;

/// Load a [`LogConfig`] from the YAML document at `path`.
///
/// Absent fields take their zero values; unrecognized severity names are
/// kept verbatim and resolved leniently at initialization time. The
/// loader itself never logs or prints; rendering a failure is the
/// caller's concern.
///
/// # Errors
///
/// Returns [`SawmillError::Read`](sawmill_types::SawmillError::Read) when
/// the file is missing or unreadable, and
/// [`SawmillError::Parse`](sawmill_types::SawmillError::Parse) when the
/// document is malformed or a field has the wrong type.
pub fn load(path: impl AsRef<Path>) -> Result<LogConfig> {
    let contents = fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sawmill_types::{LogLevel, SawmillError};
    use std::path::Path;

    fn write_config(dir: &Path, contents: &str) -> std::path::PathBuf {
        let path = dir.join("logger.yaml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "filename: ./app.log\n\
             maxsize: 10\n\
             maxbackups: 3\n\
             maxage: 7\n\
             compress: false\n\
             loglevel: warn\n",
        );

        let config = load(&path).unwrap();
        assert_eq!(config.filename, Path::new("./app.log"));
        assert_eq!(config.max_size, 10);
        assert_eq!(config.max_backups, 3);
        assert_eq!(config.max_age, 7);
        assert!(!config.compress);
        assert_eq!(config.level(), LogLevel::Warn);
    }

    #[test]
    fn test_load_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("no-such-file.yaml")).unwrap_err();
        assert!(matches!(err, SawmillError::Read(_)));
    }

    #[test]
    fn test_load_malformed_document_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "filename: [unclosed\n");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, SawmillError::Parse(_)));
    }

    #[test]
    fn test_load_mistyped_field_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "filename: ./app.log\nmaxsize: ten\n");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, SawmillError::Parse(_)));
    }
}
