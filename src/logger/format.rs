//! Console formatting and output
//!
//! One line per message: colored level marker, dimmed UTC timestamp,
//! colored tag prefix, then the message text.

use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Utc;
use colored::*;
use std::io::{self, Write};

fn timestamp() -> String {
    Utc::now().format("%H:%M:%S").to_string()
}

fn colored_tag(tag: LogTag) -> ColoredString {
    match tag {
        LogTag::System => tag.as_str().green().bold(),
        LogTag::Alchemy => tag.as_str().bright_green().bold(),
        LogTag::Holders => tag.as_str().cyan().bold(),
        LogTag::Telegram => tag.as_str().blue().bold(),
        LogTag::Health => tag.as_str().magenta().bold(),
        LogTag::Config => tag.as_str().yellow().bold(),
    }
}

pub fn format_and_log(tag: LogTag, level: LogLevel, message: &str) {
    let ts = format!("[{}]", timestamp()).dimmed();

    let line = match level {
        LogLevel::Error => format!(
            "{} {} {} {}",
            "❌".red().bold(),
            ts,
            colored_tag(tag),
            message.red()
        ),
        LogLevel::Warning => format!(
            "{} {} {} {}",
            "⚠".yellow().bold(),
            ts,
            colored_tag(tag),
            message.yellow()
        ),
        LogLevel::Info => {
            format!("{} {} {} {}", "ℹ".blue().bold(), ts, colored_tag(tag), message)
        }
        LogLevel::Debug => format!(
            "{} {} {} {}",
            "🐛".purple().bold(),
            ts,
            colored_tag(tag),
            message.dimmed()
        ),
        LogLevel::Verbose => format!(
            "{} {} {} {}",
            "·".dimmed(),
            ts,
            colored_tag(tag),
            message.dimmed()
        ),
    };

    println!("{}", line);
    let _ = io::stdout().flush();
}
