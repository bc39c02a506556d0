//! The logging facade
//!
//! `LogFacade` owns the lifecycle of one named multi-sink logger: it builds
//! the console and rotating-file sinks, registers the logger process-wide,
//! and guarantees the registry entry is removed again when the facade is
//! reconfigured or dropped.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::config::LogConfig;
use crate::error::{Error, Result};
use crate::level::Level;
use crate::logger::Logger;
use crate::path;
use crate::registry;
use crate::sink::{ConsoleSink, RotatingFileSink};

/// Interval at which the background flusher drains buffered records
const FLUSH_INTERVAL: Duration = Duration::from_millis(1000);

/// Owner of one named console + rotating-file logger
///
/// # Example
///
/// ```no_run
/// use wheellog::LogFacade;
///
/// let mut facade = LogFacade::new(100, 3);
/// facade.set_log_path("~/wheel_logs", "app")?;
/// wheellog::init_global_logger(&facade);
///
/// wheellog::info!("wheel controller up");
/// # Ok::<(), wheellog::Error>(())
/// ```
pub struct LogFacade {
    max_file_size_mb: u64,
    max_files: usize,
    level: Level,
    expand_home: bool,
    logger: Option<Arc<Logger>>,
}

impl LogFacade {
    /// Create an unconfigured facade with the given rotation limits
    ///
    /// No I/O happens until [`set_log_path`] is called.
    ///
    /// [`set_log_path`]: LogFacade::set_log_path
    pub fn new(max_file_size_mb: u64, max_files: usize) -> Self {
        Self {
            max_file_size_mb,
            max_files,
            level: Level::Info,
            expand_home: true,
            logger: None,
        }
    }

    /// Set the minimum severity the logger and its sinks emit
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Control whether a leading `~` in the log directory is expanded
    ///
    /// Defaults to true. Expansion reads the `HOME` environment variable and
    /// silently leaves the path untouched when it is unset.
    pub fn with_expand_home(mut self, expand_home: bool) -> Self {
        self.expand_home = expand_home;
        self
    }

    /// Build a configured facade from a [`LogConfig`]
    pub fn from_config(config: &LogConfig) -> Result<Self> {
        let mut facade = Self::new(config.max_file_size_mb, config.max_files)
            .with_level(config.level)
            .with_expand_home(config.expand_home);
        facade.set_log_path(&config.log_dir, &config.base_name)?;
        Ok(facade)
    }

    /// (Re)configure the logger to write under `log_dir` as `base_name`
    ///
    /// Any logger this facade already holds is flushed and deregistered
    /// first, so calling this repeatedly never trips the duplicate-name
    /// check. The directory is created if missing; the log file gets a
    /// unique timestamped name so rapid re-initializations never collide.
    ///
    /// On error the facade holds no logger and nothing new is registered.
    pub fn set_log_path(&mut self, log_dir: impl AsRef<Path>, base_name: &str) -> Result<()> {
        if let Some(old) = self.logger.take() {
            old.flush();
            registry::deregister(old.name());
        }

        let dir = if self.expand_home {
            path::expand_home(log_dir)
        } else {
            log_dir.as_ref().to_path_buf()
        };
        fs::create_dir_all(&dir).map_err(|source| Error::DirectoryCreation {
            path: dir.clone(),
            source,
        })?;

        let file_path = dir.join(path::log_file_name(base_name));
        let console = ConsoleSink::new(self.level);
        let file = RotatingFileSink::new(
            file_path,
            self.max_file_size_mb * 1024 * 1024,
            self.max_files,
            self.level,
        )?;

        let logger = Arc::new(
            Logger::new(base_name, self.level, vec![Box::new(console), Box::new(file)])
                .with_flush_level(Level::Info),
        );
        registry::register(Arc::clone(&logger))?;
        registry::flush_every(FLUSH_INTERVAL);

        self.logger = Some(logger);
        Ok(())
    }

    /// The currently configured logger, if [`set_log_path`] has been called
    ///
    /// [`set_log_path`]: LogFacade::set_log_path
    pub fn logger(&self) -> Option<Arc<Logger>> {
        self.logger.clone()
    }
}

impl Drop for LogFacade {
    fn drop(&mut self) {
        if let Some(logger) = self.logger.take() {
            logger.flush();
            registry::deregister(logger.name());
        }
    }
}
