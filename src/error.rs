//! Error types for logger configuration
//!
//! Configuration-time failures (directory creation, registry conflicts,
//! config parsing) surface here. Logging-time conditions are deliberately
//! not errors: a missing `HOME` falls back to the literal path, and log
//! calls made before initialization or after teardown are silent no-ops.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The target log directory could not be created
    #[error("failed to create log directory {path:?}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A logger with this name is already registered
    #[error("a logger named {name:?} is already registered")]
    DuplicateLoggerName { name: String },

    /// The log file could not be opened
    #[error("failed to open log file {path:?}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file could not be read
    #[error("failed to read config file {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML
    #[error("failed to parse config file {path:?}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
