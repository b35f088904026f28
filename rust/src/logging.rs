//! Verbosity-gated stderr logging for CPM runs.
//!
//! `CpmConfig::verbosity` selects how much of a run is traced:
//! - 1: one summary line per calculation (duration, critical path)
//! - 2: one line per task as each pass settles it
//! - 3: topological order, critical path walk, memo hits and misses

pub const VERBOSITY_SUMMARY: u8 = 1;
pub const VERBOSITY_PASSES: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Whether a message at `level` is emitted under `verbosity`.
#[inline]
pub fn enabled(verbosity: u8, level: u8) -> bool {
    verbosity >= level
}

/// Render a pass result as `[pass] task [start, finish]`.
pub fn pass_line(pass: &str, task: &str, start: f64, finish: f64) -> String {
    format!("[{}] {} [{}, {}]", pass, task, start, finish)
}

#[macro_export]
macro_rules! log_summary {
    ($verbosity:expr, $($arg:tt)*) => {
        if $crate::logging::enabled($verbosity, $crate::logging::VERBOSITY_SUMMARY) {
            eprintln!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_passes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $crate::logging::enabled($verbosity, $crate::logging::VERBOSITY_PASSES) {
            eprintln!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $crate::logging::enabled($verbosity, $crate::logging::VERBOSITY_DEBUG) {
            eprintln!($($arg)*);
        }
    };
}
