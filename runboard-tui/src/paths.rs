//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "runboard";
const APPLICATION: &str = "runboard";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;

const LATEST_LOG: &str = "latest.log";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, which holds the logs.
///
/// - Linux: `$XDG_CACHE_HOME/runboard` or `~/.cache/runboard`
/// - macOS: `~/Library/Caches/dev.runboard.runboard`
/// - Windows: `C:\Users\<User>\AppData\Local\runboard\runboard\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory, which holds `settings.json`.
///
/// - Linux: `$XDG_CONFIG_HOME/runboard` or `~/.config/runboard`
/// - macOS: `~/Library/Application Support/dev.runboard.runboard`
/// - Windows: `C:\Users\<User>\AppData\Roaming\runboard\runboard\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the settings file.
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Rotate logs: rename latest.log to timestamped name, clean up old logs.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    rotate_logs_in(&cache, MAX_OLD_LOGS);
}

fn rotate_logs_in(dir: &Path, keep: usize) {
    let latest = dir.join(LATEST_LOG);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = dir.join(format!("{}.log", timestamp));
        let _ = fs::rename(&latest, &archived);
    }

    cleanup_old_logs(dir, keep);
}

/// Remove old log files, keeping only the most recent `keep`.
fn cleanup_old_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first; ties broken by name, which embeds the timestamp.
    logs.sort_by_key(|e| (e.metadata().and_then(|m| m.modified()).ok(), e.file_name()));

    if logs.len() > keep {
        for entry in logs.iter().take(logs.len() - keep) {
            let _ = fs::remove_file(entry.path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_rotate_archives_latest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LATEST_LOG), "old run").unwrap();

        rotate_logs_in(dir.path(), 5);

        let names = log_names(dir.path());
        assert_eq!(names.len(), 1);
        assert_ne!(names[0], LATEST_LOG);
        assert!(names[0].ends_with(".log"));
    }

    #[test]
    fn test_cleanup_keeps_most_recent() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["20250101_000000.log", "20250102_000000.log", "20250103_000000.log"] {
            fs::write(dir.path().join(name), name).unwrap();
        }
        fs::write(dir.path().join("notes.txt"), "keep me").unwrap();

        cleanup_old_logs(dir.path(), 2);

        let names = log_names(dir.path());
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"notes.txt".to_string()));
        assert!(!names.contains(&"20250101_000000.log".to_string()));
    }

    #[test]
    fn test_cleanup_missing_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        cleanup_old_logs(&dir.path().join("missing"), 2);
    }
}
