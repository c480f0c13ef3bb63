//! Log level definitions

/// Severity levels, ordered from most to least critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Critical failures (always shown)
    Error = 0,
    /// Issues that need attention but are not fatal
    Warning = 1,
    /// Normal operational events (default threshold)
    Info = 2,
    /// Detailed diagnostics (requires --debug or --debug-<module>)
    Debug = 3,
    /// Very detailed tracing (requires --verbose)
    Verbose = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Verbose => "VERBOSE",
        }
    }
}
