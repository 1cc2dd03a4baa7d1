//! Verbosity-gated diagnostics for the room scheduler.
//!
//! All output goes to stderr and compiles down to a single integer comparison
//! when the configured verbosity is below the macro's level.
//! - 0: SILENT
//! - 1: SUMMARY (effective room count, final profit)
//! - 2: STEPS (frontier size after each interval)
//! - 3: STATES (individual state transitions)

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_SUMMARY: u8 = 1;
pub const VERBOSITY_STEPS: u8 = 2;
pub const VERBOSITY_STATES: u8 = 3;

/// Log once per scheduling run (verbosity >= 1).
#[macro_export]
macro_rules! log_summary {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_SUMMARY {
            eprintln!("[roomsched] {}", format_args!($($arg)*));
        }
    };
}

/// Log once per processed interval (verbosity >= 2).
#[macro_export]
macro_rules! log_steps {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_STEPS {
            eprintln!("[roomsched]   {}", format_args!($($arg)*));
        }
    };
}

/// Log every frontier transition (verbosity >= 3). Very noisy.
#[macro_export]
macro_rules! log_states {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_STATES {
            eprintln!("[roomsched]     {}", format_args!($($arg)*));
        }
    };
}
