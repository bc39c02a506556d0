//! Leveled logging macros
//!
//! Each macro captures its call site (`module_path!`, `file!`, `line!`),
//! formats like `format!`, and forwards through the global slot. When no
//! global logger is published the call is a silent no-op; logging before
//! initialization or after teardown never panics.

/// Log at trace level through the global logger
///
/// # Example
///
/// ```
/// wheellog::trace!("odometry tick {}", 17);
/// ```
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::global::log_with(
            $crate::Level::Trace,
            module_path!(),
            file!(),
            line!(),
            format_args!($($arg)+),
        )
    };
}

/// Log at debug level through the global logger
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::global::log_with(
            $crate::Level::Debug,
            module_path!(),
            file!(),
            line!(),
            format_args!($($arg)+),
        )
    };
}

/// Log at info level through the global logger
///
/// # Example
///
/// ```
/// wheellog::info!("wheel speed {} rpm", 42);
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::global::log_with(
            $crate::Level::Info,
            module_path!(),
            file!(),
            line!(),
            format_args!($($arg)+),
        )
    };
}

/// Log at warn level through the global logger
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::global::log_with(
            $crate::Level::Warn,
            module_path!(),
            file!(),
            line!(),
            format_args!($($arg)+),
        )
    };
}

/// Log at error level through the global logger
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::global::log_with(
            $crate::Level::Error,
            module_path!(),
            file!(),
            line!(),
            format_args!($($arg)+),
        )
    };
}

/// Log at critical level through the global logger
#[macro_export]
macro_rules! critical {
    ($($arg:tt)+) => {
        $crate::global::log_with(
            $crate::Level::Critical,
            module_path!(),
            file!(),
            line!(),
            format_args!($($arg)+),
        )
    };
}
