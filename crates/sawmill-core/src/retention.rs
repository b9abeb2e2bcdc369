//! Cleanup of rotated log files past their retention age.
//!
//! The rotation library bounds how many rotated files exist; it does not
//! bound how old they may get. This sweep closes that gap with a single
//! pass at initialization: siblings of the active file whose names extend
//! it (the rotation library suffixes the name it rotates out) and whose
//! modification time predates the cutoff are removed.

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Remove rotated backups of `active` older than `max_age_days` days.
///
/// The active file itself is never touched. Files that cannot be
/// inspected or removed are skipped rather than failing initialization.
/// Returns the number of files removed.
pub fn sweep(active: &Path, max_age_days: u64) -> usize {
    let age = Duration::from_secs(max_age_days.saturating_mul(SECONDS_PER_DAY));
    match SystemTime::now().checked_sub(age) {
        Some(cutoff) => prune_older_than(active, cutoff),
        None => 0,
    }
}

/// Remove backups of `active` last modified before `cutoff`.
fn prune_older_than(active: &Path, cutoff: SystemTime) -> usize {
    let stem = match active.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return 0,
    };
    let directory = match active.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(_) => return 0,
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = match name.to_str() {
            Some(name) => name,
            None => continue,
        };
        // Backups extend the active file's name; everything else in the
        // directory is not ours to delete.
        if name == stem || !name.starts_with(stem) {
            continue;
        }

        let modified = entry.metadata().and_then(|m| m.modified());
        if let Ok(modified) = modified {
            if modified < cutoff && fs::remove_file(entry.path()).is_ok() {
                removed += 1;
            }
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    fn touch(path: &Path) {
        fs::write(path, b"rotated contents").unwrap();
    }

    #[test]
    fn test_backups_past_cutoff_are_removed() {
        let dir = tempfile::tempdir().unwrap();
        let active = dir.path().join("app.log");
        touch(&active);
        touch(&dir.path().join("app.log.2024-01-01"));
        touch(&dir.path().join("app.log.2024-01-02.gz"));
        touch(&dir.path().join("unrelated.log"));

        // Everything on disk was just written, so a future cutoff makes
        // every backup eligible.
        let cutoff = SystemTime::now() + Duration::from_secs(3600);
        let removed = prune_older_than(&active, cutoff);

        assert_eq!(removed, 2);
        assert!(active.exists());
        assert!(dir.path().join("unrelated.log").exists());
        assert!(!dir.path().join("app.log.2024-01-01").exists());
        assert!(!dir.path().join("app.log.2024-01-02.gz").exists());
    }

    #[test]
    fn test_young_backups_survive() {
        let dir = tempfile::tempdir().unwrap();
        let active = dir.path().join("app.log");
        touch(&active);
        touch(&dir.path().join("app.log.2024-01-01"));

        let removed = prune_older_than(&active, UNIX_EPOCH);

        assert_eq!(removed, 0);
        assert!(dir.path().join("app.log.2024-01-01").exists());
    }

    #[test]
    fn test_missing_directory_removes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let active = dir.path().join("gone").join("app.log");
        assert_eq!(prune_older_than(&active, SystemTime::now()), 0);
    }

    #[test]
    fn test_zero_age_sweep_is_cheap_and_safe() {
        let dir = tempfile::tempdir().unwrap();
        let active = dir.path().join("app.log");
        touch(&active);

        // Callers gate on max_age > 0; a direct zero-day sweep must still
        // leave the active file alone.
        sweep(&active, 0);
        assert!(active.exists());
    }
}
