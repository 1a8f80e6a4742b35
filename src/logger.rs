//! Minimal leveled logger used by the `log_*!` macros.
//!
//! Everything is written to stderr so that stdout carries only the banner,
//! the per-entry report lines and the summary tables.

use colored::Colorize;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

// Set once from `--debug`; read by `log_debug!`.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// The colored tag printed in front of every message of this level.
    fn tag(self) -> String {
        match self {
            Level::Debug => "[DEBUG]".bright_blue().to_string(),
            Level::Info => "[INFO]".bright_green().to_string(),
            Level::Warn => "[WARN]".bright_yellow().to_string(),
            Level::Error => "[ERROR]".bright_red().bold().to_string(),
        }
    }
}

/// Initializes the logger. With `debug` set, `log_debug!` lines are shown.
pub fn init(debug: bool) {
    DEBUG_ENABLED.store(debug, Ordering::Relaxed);
}

/// Whether `--debug` was passed.
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Writes one log line. Called through the macros, not directly.
#[doc(hidden)]
pub fn log(level: Level, args: fmt::Arguments<'_>) {
    if level == Level::Debug && !is_debug_enabled() {
        return;
    }
    eprintln!("{} {}", level.tag(), args);
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Debug, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Warn, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Error, format_args!($($arg)*))
    };
}
