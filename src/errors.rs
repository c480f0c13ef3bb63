//! Structured error types for holderbot
//!
//! Propagation policy:
//! - `Upstream` errors surface to the user as a failure message.
//! - `Parse` errors on individual transfer records are swallowed by the
//!   balance fold (the record is skipped, logged at debug).
//! - `Validation` errors are raised before any API call is made.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HolderBotError {
    /// Alchemy API unreachable or returned an error envelope
    #[error("Alchemy API error: {0}")]
    Upstream(String),

    /// Malformed numeric field in an upstream record
    #[error("Failed to parse value: {0}")]
    Parse(String),

    /// Malformed user input, rejected before any API call
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Missing or malformed environment configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Telegram API failure
    #[error("Telegram error: {0}")]
    Telegram(String),
}

impl From<reqwest::Error> for HolderBotError {
    fn from(err: reqwest::Error) -> Self {
        HolderBotError::Upstream(format!("Failed to connect to Alchemy API: {}", err))
    }
}
