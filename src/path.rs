//! Log path helpers
//!
//! Home-shorthand expansion for the log directory and generation of unique
//! timestamped log file names.

use std::env;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Expand a leading `~` in `path` using the `HOME` environment variable
///
/// If `HOME` is unset the path is returned unchanged; a missing home
/// directory is a soft fallback, not an error.
pub fn expand_home(path: impl AsRef<Path>) -> PathBuf {
    expand_home_with(path, env::var("HOME").ok())
}

/// Expand a leading `~` using an explicit home value
///
/// Split out from [`expand_home`] so expansion behavior can be tested
/// without touching the process environment.
pub fn expand_home_with(path: impl AsRef<Path>, home: Option<String>) -> PathBuf {
    let raw = path.as_ref().to_string_lossy();
    PathBuf::from(shellexpand::tilde_with_context(raw.as_ref(), || home).into_owned())
}

/// Generate a unique timestamped log file name for `base_name`
///
/// Format: `<base_name>.<YYYYMMDD-HHMMSS>.<5-digit tens-of-microseconds>.log`.
/// The sub-second component disambiguates multiple initializations within the
/// same wall-clock second (rapid restarts in test loops).
pub fn log_file_name(base_name: &str) -> String {
    log_file_name_at(base_name, Local::now())
}

/// Generate the log file name for an explicit instant
pub fn log_file_name_at(base_name: &str, now: DateTime<Local>) -> String {
    format!(
        "{}.{}.{:05}.log",
        base_name,
        now.format("%Y%m%d-%H%M%S"),
        now.timestamp_subsec_micros() / 10
    )
}
