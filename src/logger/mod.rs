//! Structured logging for superchain-check
//!
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-tag debug control via `--debug-<tag>` flags
//! - Colored output on stderr, so stdout stays a clean Markdown report
//!
//! ## Usage
//!
//! ```rust
//! use superchain_check::logger::{self, LogTag};
//!
//! logger::error(LogTag::Api, "Connection failed");
//! logger::info(LogTag::Report, "Analyzing base");
//! logger::debug(LogTag::Api, "Request details: ..."); // Only with --debug-api
//! logger::verbose(LogTag::Api, "Raw body: ..."); // Only with --verbose
//! ```

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{enable_debug_for, get_logger_config, update_logger_config, LoggerConfig};
pub use levels::LogLevel;
#[cfg(test)]
pub(crate) use format::plain_line;
pub use tags::LogTag;

/// Configure the logger from parsed command-line flags
///
/// Call once at startup, before any logging occurs.
pub fn init(verbose: bool, quiet: bool, debug_tags: &[LogTag]) {
    update_logger_config(|config| {
        config.min_level = if quiet {
            LogLevel::Error
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Info
        };
    });

    for tag in debug_tags {
        enable_debug_for(*tag);
    }
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (hidden by --quiet)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (shown by default)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level
///
/// Only shown when `--debug-<tag>` was given for this tag, or with `--verbose`.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (only with --verbose)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
