//! Telegram integration
//!
//! ```text
//! telegram/
//! ├── mod.rs        # Public API
//! ├── bot.rs        # Bot creation and message sending
//! ├── polling.rs    # getUpdates loop and command dispatch
//! ├── commands.rs   # Command handlers (/start, /help, /th, /whoami)
//! └── formatters.rs # HTML message formatters
//! ```
//!
//! The bot serves a single authorized user; every command except
//! /whoami is rejected for anyone else.

pub mod bot;
pub mod commands;
pub mod formatters;
pub mod polling;

pub use bot::init_bot;
pub use formatters::{format_balance, html_escape, shorten_address};
pub use polling::start_polling;
