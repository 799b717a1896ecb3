//! Convenience macros for message display with conditional tracing support.
//!
//! In normal mode messages go straight to the console with `println!`, so
//! the session transcript stays byte-exact. When debug mode is enabled
//! (`TIDO_DEBUG` or `RUST_LOG` set) the same calls route through `tracing`
//! instead, picking up timestamps and level information from the subscriber
//! installed in `main`.

use std::sync::OnceLock;

/// Cached debug mode detection; environment variables are checked once per run.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns whether debug mode is enabled.
///
/// Debug mode is on when either `TIDO_DEBUG` or `RUST_LOG` is set in the
/// environment. The result is cached for the lifetime of the process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TIDO_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a user-facing message with automatic debug mode routing.
///
/// - Debug mode: `tracing::info!`
/// - Normal mode: `println!`
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

/// Debug-only diagnostics, suppressed entirely in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($($arg:tt)*) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!($($arg)*);
        }
    };
}
