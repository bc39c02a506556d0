//! Output sinks
//!
//! A sink is one independent output destination with its own severity
//! threshold. The logger dispatches each record to every sink whose threshold
//! the record meets.

mod console;
mod file;

pub use console::ConsoleSink;
pub use file::RotatingFileSink;

use crate::level::Level;
use crate::record::Record;

/// One output destination for log records
///
/// Implementations serialize their own writes; callers may invoke `log` from
/// any number of threads without external locking.
pub trait Sink: Send + Sync {
    /// Minimum severity this sink emits
    fn level(&self) -> Level;

    /// Write a record that already met this sink's threshold
    fn log(&self, record: &Record);

    /// Force buffered output to its destination
    fn flush(&self);
}
