//! Process-wide global logger slot
//!
//! One shared back-reference to the "default" logger, read by the leveled
//! macros. The slot never owns the logger; the facade (and the registry)
//! remain the owners, and the slot is simply re-pointed or cleared as the
//! facade's lifecycle progresses. Logging through an empty slot is a silent
//! no-op, so call sites never have to care whether logging is up yet.

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::facade::LogFacade;
use crate::level::Level;
use crate::logger::Logger;
use crate::record::Record;

static GLOBAL: RwLock<Option<Arc<Logger>>> = RwLock::new(None);

/// Point the global slot at the facade's current logger
///
/// Call after [`LogFacade::set_log_path`]; an unconfigured facade clears
/// the slot.
///
/// [`LogFacade::set_log_path`]: crate::LogFacade::set_log_path
pub fn init_global_logger(facade: &LogFacade) {
    if let Ok(mut slot) = GLOBAL.write() {
        *slot = facade.logger();
    }
}

/// Empty the global slot; subsequent macro calls become no-ops
pub fn clear_global_logger() {
    if let Ok(mut slot) = GLOBAL.write() {
        *slot = None;
    }
}

/// The logger currently published in the global slot, if any
pub fn global_logger() -> Option<Arc<Logger>> {
    GLOBAL.read().ok().and_then(|slot| slot.clone())
}

/// Macro support: forward one call-site record through the global slot
///
/// The message is only formatted once a live, enabled logger is found, so
/// disabled or uninitialized logging costs a slot read and nothing more.
#[doc(hidden)]
pub fn log_with(
    level: Level,
    target: &'static str,
    file: &'static str,
    line: u32,
    args: fmt::Arguments<'_>,
) {
    let Some(logger) = global_logger() else {
        return;
    };
    if !logger.enabled(level) {
        return;
    }
    logger.log(&Record::new(level, target, file, line, args.to_string()));
}
