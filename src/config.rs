//! Logging configuration
//!
//! TOML-loadable settings for the facade. Every field has a default, so an
//! empty or missing config file yields the stock setup: `~/wheel_logs`,
//! base name `log`, 100 MB per file, 3 rotated files, info level.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::level::Level;

/// Settings consumed by [`LogFacade::from_config`]
///
/// [`LogFacade::from_config`]: crate::LogFacade::from_config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Directory log files are written to; a leading `~` is expanded
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Base name for log files and the logger's registry name
    #[serde(default = "default_base_name")]
    pub base_name: String,
    /// Size bound per log file, in megabytes
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,
    /// How many rotated files to retain alongside the current one
    #[serde(default = "default_max_files")]
    pub max_files: usize,
    /// Minimum severity the logger emits
    #[serde(default = "default_level")]
    pub level: Level,
    /// Whether a leading `~` in `log_dir` is expanded via `HOME`
    #[serde(default = "default_expand_home")]
    pub expand_home: bool,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("~/wheel_logs")
}

fn default_base_name() -> String {
    "log".to_string()
}

fn default_max_file_size_mb() -> u64 {
    100
}

fn default_max_files() -> usize {
    3
}

fn default_level() -> Level {
    Level::Info
}

fn default_expand_home() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            base_name: default_base_name(),
            max_file_size_mb: default_max_file_size_mb(),
            max_files: default_max_files(),
            level: default_level(),
            expand_home: default_expand_home(),
        }
    }
}

impl LogConfig {
    /// Load configuration from a TOML file, or return defaults if missing
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.log_dir, PathBuf::from("~/wheel_logs"));
        assert_eq!(config.base_name, "log");
        assert_eq!(config.max_file_size_mb, 100);
        assert_eq!(config.max_files, 3);
        assert_eq!(config.level, Level::Info);
        assert!(config.expand_home);
    }

    #[test]
    fn test_config_round_trip() {
        let config = LogConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: LogConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: LogConfig = toml::from_str("base_name = \"svc\"\nlevel = \"debug\"").unwrap();
        assert_eq!(parsed.base_name, "svc");
        assert_eq!(parsed.level, Level::Debug);
        assert_eq!(parsed.max_files, 3);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let config = LogConfig::load("/nonexistent/wheellog.toml").unwrap();
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wheellog.toml");
        fs::write(&path, "max_files = \"lots\"").unwrap();
        let err = LogConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }
}
