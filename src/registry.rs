//! Process-wide logger registry
//!
//! Maps logger names to shared handles so any call site can look a logger up
//! by name. At most one logger may hold a given name; reconfiguring a facade
//! deregisters its old entry before registering the replacement.
//!
//! The registry also owns the periodic flusher: a single background thread,
//! started on first use and shared by all loggers in the process, that
//! flushes every registered logger each interval. Records below a logger's
//! eager-flush threshold therefore reach disk within roughly one interval.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Once, OnceLock};
use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::logger::Logger;

static REGISTRY: OnceLock<Mutex<HashMap<String, Arc<Logger>>>> = OnceLock::new();
static FLUSH_INTERVAL_MS: AtomicU64 = AtomicU64::new(1000);
static FLUSHER: Once = Once::new();

fn lock_registry() -> MutexGuard<'static, HashMap<String, Arc<Logger>>> {
    let registry = REGISTRY.get_or_init(|| Mutex::new(HashMap::new()));
    match registry.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Register a logger under its name
///
/// Fails with [`Error::DuplicateLoggerName`] if the name is already taken;
/// the caller must deregister the previous holder first.
pub fn register(logger: Arc<Logger>) -> Result<()> {
    let mut registry = lock_registry();
    if registry.contains_key(logger.name()) {
        return Err(Error::DuplicateLoggerName {
            name: logger.name().to_string(),
        });
    }
    registry.insert(logger.name().to_string(), logger);
    Ok(())
}

/// Remove and return the logger registered under `name`, if any
pub fn deregister(name: &str) -> Option<Arc<Logger>> {
    lock_registry().remove(name)
}

/// Look up the logger registered under `name`
pub fn get(name: &str) -> Option<Arc<Logger>> {
    lock_registry().get(name).cloned()
}

/// Flush every registered logger synchronously
pub fn flush_all() {
    // Clone the handles out so flushing happens without the registry lock
    let loggers: Vec<Arc<Logger>> = lock_registry().values().cloned().collect();
    for logger in loggers {
        logger.flush();
    }
}

/// Arm the periodic flusher with the given interval
///
/// The flusher thread is started once per process and outlives any facade;
/// later calls only adjust the interval.
pub fn flush_every(interval: Duration) {
    let millis = (interval.as_millis() as u64).max(1);
    FLUSH_INTERVAL_MS.store(millis, Ordering::SeqCst);
    FLUSHER.call_once(|| {
        let _ = thread::Builder::new()
            .name("wheellog-flusher".to_string())
            .spawn(|| loop {
                let millis = FLUSH_INTERVAL_MS.load(Ordering::SeqCst);
                thread::sleep(Duration::from_millis(millis));
                flush_all();
            });
    });
}
