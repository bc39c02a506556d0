//! Named multi-sink logger
//!
//! A logger fans each record out to every sink whose threshold the record
//! meets, then flushes immediately for records at or above its flush level.
//! Loggers are immutable after construction and shared via `Arc`; the sinks
//! serialize their own writes, so no external locking is needed to log from
//! multiple threads.

use crate::level::Level;
use crate::record::Record;
use crate::sink::Sink;

/// A named fan-out over an ordered set of sinks
pub struct Logger {
    name: String,
    level: Level,
    flush_level: Level,
    sinks: Vec<Box<dyn Sink>>,
}

impl Logger {
    /// Create a logger over `sinks` with the given overall severity gate
    ///
    /// The default flush level is `Critical`; use [`with_flush_level`] to
    /// flush eagerly for lower severities.
    ///
    /// [`with_flush_level`]: Logger::with_flush_level
    pub fn new(name: impl Into<String>, level: Level, sinks: Vec<Box<dyn Sink>>) -> Self {
        Self {
            name: name.into(),
            level,
            flush_level: Level::Critical,
            sinks,
        }
    }

    /// Flush all sinks immediately after any record at or above `level`
    pub fn with_flush_level(mut self, level: Level) -> Self {
        self.flush_level = level;
        self
    }

    /// Registry name of this logger
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overall severity gate
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether a record at `level` would be emitted at all
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Dispatch one record to every sink whose threshold it meets
    pub fn log(&self, record: &Record) {
        if !self.enabled(record.level) {
            return;
        }
        for sink in &self.sinks {
            if record.level >= sink.level() {
                sink.log(record);
            }
        }
        if record.level >= self.flush_level {
            self.flush();
        }
    }

    /// Flush every sink synchronously
    pub fn flush(&self) {
        for sink in &self.sinks {
            sink.flush();
        }
    }
}
