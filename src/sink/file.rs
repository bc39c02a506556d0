//! Size-rotating file sink
//!
//! Appends rendered records to a log file, rotating it through numbered
//! siblings (`<file>.1`, `<file>.2`, ...) once it would exceed the size
//! bound. With `max_files` retained siblings plus the current file, total
//! on-disk footprint stays within `max_size * (max_files + 1)`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::level::Level;
use crate::record::Record;
use crate::sink::Sink;

/// Sink that appends to a size-bounded, rotated log file
#[derive(Debug)]
pub struct RotatingFileSink {
    path: PathBuf,
    max_size: u64,
    max_files: usize,
    level: Level,
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    writer: BufWriter<File>,
    written: u64,
}

impl RotatingFileSink {
    /// Open (or create) the log file at `path`
    ///
    /// `max_size` is the per-file byte bound; `max_files` is how many rotated
    /// siblings to retain. The parent directory must already exist.
    pub fn new(
        path: impl Into<PathBuf>,
        max_size: u64,
        max_files: usize,
        level: Level,
    ) -> Result<Self> {
        let path = path.into();
        let file = open_append(&path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        Ok(Self {
            path,
            max_size,
            max_files,
            level,
            inner: Mutex::new(Inner {
                writer: BufWriter::new(file),
                written,
            }),
        })
    }

    /// Path of the current (unrotated) log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rotated_path(&self, index: usize) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.path.display(), index))
    }

    /// Shift rotated siblings up by one and start a fresh current file
    fn rotate(&self, inner: &mut Inner) -> io::Result<()> {
        inner.writer.flush()?;

        if self.max_files > 0 {
            let oldest = self.rotated_path(self.max_files);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (1..self.max_files).rev() {
                let from = self.rotated_path(index);
                if from.exists() {
                    fs::rename(&from, self.rotated_path(index + 1))?;
                }
            }
            fs::rename(&self.path, self.rotated_path(1))?;
        }

        let file = File::create(&self.path)?;
        inner.writer = BufWriter::new(file);
        inner.written = 0;
        Ok(())
    }
}

impl Sink for RotatingFileSink {
    fn level(&self) -> Level {
        self.level
    }

    fn log(&self, record: &Record) {
        let line = record.render(false);
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        if inner.written > 0 && inner.written + line.len() as u64 > self.max_size {
            // A failed rotation keeps appending to the current file rather
            // than dropping the record
            let _ = self.rotate(&mut inner);
        }
        if inner.writer.write_all(line.as_bytes()).is_ok() {
            inner.written += line.len() as u64;
        }
    }

    fn flush(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            let _ = inner.writer.flush();
        }
    }
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(message: &str) -> Record {
        Record::new(Level::Info, "wheellog::tests", "src/sink/file.rs", 1, message)
    }

    #[test]
    fn test_writes_are_buffered_until_flush() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("svc.log");
        let sink = RotatingFileSink::new(&path, 1024 * 1024, 3, Level::Info).unwrap();

        sink.log(&record("first"));
        sink.flush();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("first"));
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn test_rotation_bounds_file_count() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("svc.log");
        // Each rendered line is well over 64 bytes, so every record rotates
        let sink = RotatingFileSink::new(&path, 64, 2, Level::Info).unwrap();

        for i in 0..6 {
            sink.log(&record(&format!("message number {i}")));
        }
        sink.flush();

        assert!(path.exists());
        assert!(dir.path().join("svc.log.1").exists());
        assert!(dir.path().join("svc.log.2").exists());
        assert!(!dir.path().join("svc.log.3").exists());
    }

    #[test]
    fn test_rotation_shifts_newest_to_dot_one() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("svc.log");
        let sink = RotatingFileSink::new(&path, 64, 2, Level::Info).unwrap();

        sink.log(&record("older"));
        sink.log(&record("newer"));
        sink.flush();

        // "newer" forced a rotation, pushing "older" into svc.log.1
        let rotated = fs::read_to_string(dir.path().join("svc.log.1")).unwrap();
        assert!(rotated.contains("older"));
        let current = fs::read_to_string(&path).unwrap();
        assert!(current.contains("newer"));
    }

    #[test]
    fn test_zero_max_files_truncates_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("svc.log");
        let sink = RotatingFileSink::new(&path, 64, 0, Level::Info).unwrap();

        sink.log(&record("first"));
        sink.log(&record("second"));
        sink.flush();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("second"));
        assert!(!contents.contains("first"));
        assert!(!dir.path().join("svc.log.1").exists());
    }

    #[test]
    fn test_reopens_existing_file_and_counts_its_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("svc.log");
        fs::write(&path, "preexisting content longer than the bound\n").unwrap();

        let sink = RotatingFileSink::new(&path, 16, 1, Level::Info).unwrap();
        sink.log(&record("fresh"));
        sink.flush();

        // The preexisting bytes counted toward the bound, so the first write rotated
        assert!(dir.path().join("svc.log.1").exists());
        let current = fs::read_to_string(&path).unwrap();
        assert!(current.contains("fresh"));
        assert!(!current.contains("preexisting"));
    }

    #[test]
    fn test_open_failure_is_file_open_error() {
        let dir = TempDir::new().unwrap();
        let missing_parent = dir.path().join("no_such_dir").join("svc.log");
        let err = RotatingFileSink::new(&missing_parent, 64, 1, Level::Info).unwrap_err();
        assert!(matches!(err, Error::FileOpen { .. }));
    }
}
