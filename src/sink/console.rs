//! Console sink
//!
//! Writes rendered records to stdout, with the level token color-coded when
//! stdout is an interactive terminal.

use std::io::{self, IsTerminal, Write};

use crate::level::Level;
use crate::record::Record;
use crate::sink::Sink;

/// Sink that writes records to stdout
pub struct ConsoleSink {
    level: Level,
    ansi: bool,
}

impl ConsoleSink {
    /// Create a console sink with the given severity threshold
    ///
    /// Color output is enabled only when stdout is a terminal, so redirected
    /// output stays free of escape sequences.
    pub fn new(level: Level) -> Self {
        Self {
            level,
            ansi: io::stdout().is_terminal(),
        }
    }

    #[cfg(test)]
    fn with_ansi(level: Level, ansi: bool) -> Self {
        Self { level, ansi }
    }

    fn render(&self, record: &Record) -> String {
        record.render(self.ansi)
    }
}

impl Sink for ConsoleSink {
    fn level(&self) -> Level {
        self.level
    }

    fn log(&self, record: &Record) {
        let line = self.render(record);
        // One locked write per record keeps lines whole under concurrency
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = io::stdout().lock().flush();
    }
}
