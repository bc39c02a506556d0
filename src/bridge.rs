//! `log` crate interop
//!
//! Installs a `log::Log` adapter that forwards records from the standard
//! `log` macros into the global slot, so third-party crates logging through
//! `log` land in the same sinks as this crate's own macros. The adapter
//! reads the slot on every call, which keeps it valid across facade
//! reconfiguration; the same null-guard applies.

use log::SetLoggerError;

use crate::global::global_logger;
use crate::level::Level;
use crate::record::Record;

struct GlobalBridge;

static BRIDGE: GlobalBridge = GlobalBridge;

/// Route the `log` crate's macros into the global logger
///
/// May be called once per process; `log` rejects a second logger.
pub fn install_log_bridge() -> Result<(), SetLoggerError> {
    log::set_logger(&BRIDGE)?;
    // Filtering happens in the logger; let everything through here
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Trace => Level::Trace,
        log::Level::Debug => Level::Debug,
        log::Level::Info => Level::Info,
        log::Level::Warn => Level::Warn,
        log::Level::Error => Level::Error,
    }
}

impl log::Log for GlobalBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        global_logger()
            .map(|logger| logger.enabled(map_level(metadata.level())))
            .unwrap_or(false)
    }

    fn log(&self, record: &log::Record<'_>) {
        let Some(logger) = global_logger() else {
            return;
        };
        let level = map_level(record.level());
        if !logger.enabled(level) {
            return;
        }
        logger.log(&Record::new(
            level,
            record.module_path_static().unwrap_or("unknown"),
            record.file_static().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {
        if let Some(logger) = global_logger() {
            logger.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(map_level(log::Level::Trace), Level::Trace);
        assert_eq!(map_level(log::Level::Debug), Level::Debug);
        assert_eq!(map_level(log::Level::Info), Level::Info);
        assert_eq!(map_level(log::Level::Warn), Level::Warn);
        assert_eq!(map_level(log::Level::Error), Level::Error);
    }
}
