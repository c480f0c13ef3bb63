//! Logger configuration from command-line arguments
//!
//! Filtering flags:
//! - `--debug` enables Debug level for every tag
//! - `--debug-<module>` enables Debug level for one tag (e.g. `--debug-alchemy`)
//! - `--verbose` enables Verbose level globally
//! - `--quiet` raises the threshold to Warning

use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::OnceCell;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum level shown (messages above this are filtered)
    pub min_level: LogLevel,
    /// Tags with per-module debug enabled via --debug-<module>
    pub debug_tags: HashSet<String>,
    /// Global debug flag (--debug)
    pub debug_all: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            debug_all: false,
        }
    }
}

static LOGGER_CONFIG: OnceCell<LoggerConfig> = OnceCell::new();

/// Parse command-line arguments into the global logger config.
/// Safe to call more than once; later calls are no-ops.
pub fn init_from_args() {
    let mut config = LoggerConfig::default();

    for arg in std::env::args() {
        match arg.as_str() {
            "--verbose" => {
                config.min_level = LogLevel::Verbose;
            }
            "--debug" => {
                config.debug_all = true;
            }
            "--quiet" => {
                config.min_level = LogLevel::Warning;
            }
            other => {
                if let Some(module) = other.strip_prefix("--debug-") {
                    config.debug_tags.insert(module.to_lowercase());
                }
            }
        }
    }

    let _ = LOGGER_CONFIG.set(config);
}

pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG.get().cloned().unwrap_or_default()
}

/// Whether Debug-level messages for this tag should be shown
pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    let config = get_logger_config();
    config.debug_all
        || config.min_level >= LogLevel::Debug
        || config.debug_tags.contains(&tag.to_debug_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_is_info() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, LogLevel::Info);
        assert!(!config.debug_all);
        assert!(config.debug_tags.is_empty());
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warning);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Verbose);
    }
}
