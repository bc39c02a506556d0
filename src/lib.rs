//! Wheellog - process-wide structured logging facade
//!
//! A small synchronous logging runtime built around one idea: a facade owns
//! a named logger that fans records out to a console sink and a size-rotated
//! file sink, publishes it in a process-wide registry, and can be safely
//! reconfigured or torn down without leaving stale entries behind.
//!
//! ## Quick start
//!
//! ```no_run
//! use wheellog::LogFacade;
//!
//! // 100 MB per file, 3 rotated files retained
//! let mut facade = LogFacade::new(100, 3);
//! facade.set_log_path("~/wheel_logs", "app")?;
//! wheellog::init_global_logger(&facade);
//!
//! wheellog::info!("controller up, {} wheels online", 4);
//! wheellog::warn!("battery at {}%", 15);
//! # Ok::<(), wheellog::Error>(())
//! ```
//!
//! Records at info and above are flushed to disk immediately; anything
//! buffered below that is drained by a shared background flusher every
//! second. Logging before `init_global_logger` (or after
//! [`clear_global_logger`]) is a silent no-op.
//!
//! ## From a config file
//!
//! ```no_run
//! use wheellog::{LogConfig, LogFacade};
//!
//! let config = LogConfig::load("wheellog.toml")?;
//! let facade = LogFacade::from_config(&config)?;
//! wheellog::init_global_logger(&facade);
//! # Ok::<(), wheellog::Error>(())
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod facade;
pub mod global;
pub mod level;
pub mod logger;
mod macros;
pub mod path;
pub mod record;
pub mod registry;
pub mod sink;

pub use bridge::install_log_bridge;
pub use config::LogConfig;
pub use error::{Error, Result};
pub use facade::LogFacade;
pub use global::{clear_global_logger, global_logger, init_global_logger};
pub use level::Level;
pub use logger::Logger;
pub use record::Record;
pub use sink::{ConsoleSink, RotatingFileSink, Sink};
