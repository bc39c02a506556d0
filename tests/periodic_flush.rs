//! Periodic flusher behavior
//!
//! Records below the eager-flush threshold sit in the file sink's buffer
//! until the shared background flusher drains them, bounding log loss on
//! crash to roughly one interval.

use std::fs;
use std::thread;
use std::time::Duration;

use tempfile::TempDir;
use wheellog::{Level, LogFacade, Record};

#[test]
fn flusher_drains_buffered_records_within_interval() {
    let dir = TempDir::new().unwrap();
    let mut facade = LogFacade::new(1, 1).with_level(Level::Trace);
    facade.set_log_path(dir.path(), "periodic").unwrap();
    let logger = facade.logger().unwrap();

    logger.log(&Record::new(
        Level::Trace,
        "periodic_flush",
        "tests/periodic_flush.rs",
        1,
        "buffered trace line",
    ));

    let log_file = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| p.extension().is_some_and(|ext| ext == "log"))
        .unwrap();

    // Trace sits below the info flush threshold, so it is still buffered
    let contents = fs::read_to_string(&log_file).unwrap();
    assert!(!contents.contains("buffered trace line"));

    // The 1000 ms flusher picks it up; allow slack for a slow scheduler
    thread::sleep(Duration::from_millis(2500));
    let contents = fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("buffered trace line"));
}
