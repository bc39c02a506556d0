//! A single log record and its line rendering
//!
//! Records capture their timestamp and calling thread at construction time,
//! so the moment of the logging call is what ends up in the output even if a
//! sink briefly blocks on its write lock.

use std::thread;

use chrono::{DateTime, Local};

use crate::level::Level;

const ANSI_RESET: &str = "\x1b[0m";

/// A single log record
#[derive(Debug, Clone)]
pub struct Record {
    /// Local time the record was created, microsecond precision
    pub timestamp: DateTime<Local>,
    /// Record severity
    pub level: Level,
    /// Module path of the call site
    pub target: &'static str,
    /// Source file of the call site
    pub file: &'static str,
    /// Source line of the call site
    pub line: u32,
    /// Numeric id of the calling thread
    pub thread: u64,
    /// Formatted message
    pub message: String,
}

impl Record {
    /// Create a record stamped with the current instant and thread
    pub fn new(
        level: Level,
        target: &'static str,
        file: &'static str,
        line: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            target,
            file,
            line,
            thread: current_thread_id(),
            message: message.into(),
        }
    }

    /// Render the record as one output line, newline included
    ///
    /// Format: `[YYYY-MM-DD HH:MM:SS.ffffff file:line thread LEVEL] message`.
    /// With `ansi` set, only the level token is color-wrapped; file output
    /// uses `ansi = false` so log files stay free of escape sequences.
    pub fn render(&self, ansi: bool) -> String {
        let ts = self.timestamp.format("%Y-%m-%d %H:%M:%S%.6f");
        if ansi {
            format!(
                "[{} {}:{} {} {}{}{}] {}\n",
                ts,
                self.file,
                self.line,
                self.thread,
                self.level.color_code(),
                self.level.as_str(),
                ANSI_RESET,
                self.message
            )
        } else {
            format!(
                "[{} {}:{} {} {}] {}\n",
                ts,
                self.file,
                self.line,
                self.thread,
                self.level.as_str(),
                self.message
            )
        }
    }
}

/// Numeric id of the current thread
///
/// `ThreadId` exposes no stable accessor, so this parses the id out of its
/// debug form (`ThreadId(N)`).
fn current_thread_id() -> u64 {
    let id = format!("{:?}", thread::current().id());
    id.trim_start_matches("ThreadId(")
        .trim_end_matches(')')
        .parse()
        .unwrap_or(0)
}
