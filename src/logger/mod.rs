//! Structured logging for holderbot
//!
//! Provides a small, ergonomic logging API:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via `--debug-<module>` flags
//! - Colored console output with UTC timestamps
//!
//! ## Usage
//!
//! ```rust,ignore
//! use holderbot::logger::{self, LogTag};
//!
//! logger::info(LogTag::Alchemy, "Fetched 1200 transfers");
//! logger::error(LogTag::Telegram, "Failed to send message");
//! logger::debug(LogTag::Holders, "Skipped unparseable value"); // only with --debug-holders
//! ```
//!
//! Call `logger::init()` once at startup, before any logging occurs.

mod config;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system from command-line arguments
pub fn init() {
    config::init_from_args();
}

fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    // Errors always log
    if level == LogLevel::Error {
        return true;
    }

    // Debug requires a debug flag for that tag (or --debug / --verbose)
    if level == LogLevel::Debug {
        return config::is_debug_enabled_for_tag(tag);
    }

    level <= config::get_logger_config().min_level
}

fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }
    format::format_and_log(tag, level, message);
}

/// Log at ERROR level (always shown, critical issues)
pub fn error(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (important but non-fatal issues)
pub fn warning(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level, shown only with `--debug` or `--debug-<module>`
pub fn debug(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level, shown only with `--verbose`
pub fn verbose(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Verbose, message);
}
