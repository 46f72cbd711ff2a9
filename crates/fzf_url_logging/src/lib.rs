#![deny(missing_docs)]
//! Shared logging utilities for the fzf-url workspace.
//!
//! This crate provides the `url_*` logging macros used across the codebase,
//! a helper that keeps long URLs from flooding log lines, and a minimal test
//! initializer for the global logger.

/// Longest URL prefix written to a log line before it is elided.
pub const LOG_URL_MAX_CHARS: usize = 120;

/// Shortens `url` to at most [`LOG_URL_MAX_CHARS`] characters for logging.
///
/// Scrollback can contain URLs up to several kilobytes long; logging them in
/// full makes the file log unreadable.
pub fn url_for_log(url: &str) -> String {
    if url.chars().count() <= LOG_URL_MAX_CHARS {
        return url.to_string();
    }
    let mut shortened: String = url.chars().take(LOG_URL_MAX_CHARS).collect();
    shortened.push_str("...");
    shortened
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! url_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! url_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! url_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! url_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! url_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);
}
