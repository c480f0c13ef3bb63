//! Log tags identifying the module a message comes from

use std::fmt;

/// Source module of a log message. Each tag maps to one
/// `--debug-<module>` flag via [`LogTag::to_debug_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Alchemy,
    Holders,
    Telegram,
    Health,
    Config,
}

impl LogTag {
    /// Bracketed tag shown in console output
    pub fn as_str(&self) -> &'static str {
        match self {
            LogTag::System => "[SYSTEM]",
            LogTag::Alchemy => "[ALCHEMY]",
            LogTag::Holders => "[HOLDERS]",
            LogTag::Telegram => "[TELEGRAM]",
            LogTag::Health => "[HEALTH]",
            LogTag::Config => "[CONFIG]",
        }
    }

    /// Lowercase key matched against `--debug-<module>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system",
            LogTag::Alchemy => "alchemy",
            LogTag::Holders => "holders",
            LogTag::Telegram => "telegram",
            LogTag::Health => "health",
            LogTag::Config => "config",
        }
        .to_string()
    }
}

impl fmt::Display for LogTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_key_matches_flag_spelling() {
        assert_eq!(LogTag::Alchemy.to_debug_key(), "alchemy");
        assert_eq!(LogTag::Telegram.to_debug_key(), "telegram");
    }

    #[test]
    fn test_display_is_bracketed() {
        assert_eq!(LogTag::Holders.to_string(), "[HOLDERS]");
    }
}
