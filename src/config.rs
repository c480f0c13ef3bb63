//! Environment configuration
//!
//! All settings come from environment variables (a local `.env` file is
//! loaded first via dotenv). The configuration is loaded once at startup
//! into a global `OnceCell` and accessed through `with_config`.
//!
//! Required:
//! - `TELEGRAM_BOT_TOKEN` - bot token from @BotFather
//! - `ALCHEMY_API_KEY`    - Alchemy API key for Abstract mainnet
//! - `AUTHORIZED_USER_ID` - Telegram user id allowed to use the bot
//!
//! Optional:
//! - `PORT`                - enables the health check HTTP server
//! - `TOP_HOLDERS_COUNT`   - holders returned by /th (default 20)
//! - `SHOW_OTHER_HOLDINGS` - include each holder's other significant
//!                           token holdings in the report (default false)

use crate::errors::HolderBotError;
use once_cell::sync::OnceCell;

/// Default number of holders reported by /th
const DEFAULT_TOP_HOLDERS_COUNT: usize = 20;

#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token
    pub telegram_bot_token: String,
    /// Alchemy API key
    pub alchemy_api_key: String,
    /// The single Telegram user id authorized to use the bot
    pub authorized_user_id: i64,
    /// Health check server port (None disables the server)
    pub health_port: Option<u16>,
    /// Number of holders reported by /th
    pub top_holders_count: usize,
    /// Include per-holder other significant token holdings in reports
    pub show_other_holdings: bool,
}

/// Global configuration instance, set once at startup
static CONFIG: OnceCell<Config> = OnceCell::new();

fn required_var(name: &str) -> Result<String, HolderBotError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            HolderBotError::Config(format!("{} not found in environment variables", name))
        })
}

impl Config {
    /// Build the configuration from environment variables
    pub fn from_env() -> Result<Self, HolderBotError> {
        let telegram_bot_token = required_var("TELEGRAM_BOT_TOKEN")?;
        let alchemy_api_key = required_var("ALCHEMY_API_KEY")?;

        let authorized_user_id = required_var("AUTHORIZED_USER_ID")?
            .parse::<i64>()
            .map_err(|_| {
                HolderBotError::Config("AUTHORIZED_USER_ID must be a valid integer".to_string())
            })?;

        let health_port = match std::env::var("PORT") {
            Ok(raw) => Some(raw.parse::<u16>().map_err(|_| {
                HolderBotError::Config(format!("PORT must be a valid port number, got '{}'", raw))
            })?),
            Err(_) => None,
        };

        let top_holders_count = match std::env::var("TOP_HOLDERS_COUNT") {
            Ok(raw) => raw.parse::<usize>().map_err(|_| {
                HolderBotError::Config(format!(
                    "TOP_HOLDERS_COUNT must be a positive integer, got '{}'",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_TOP_HOLDERS_COUNT,
        };

        let show_other_holdings = std::env::var("SHOW_OTHER_HOLDINGS")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            telegram_bot_token,
            alchemy_api_key,
            authorized_user_id,
            health_port,
            top_holders_count,
            show_other_holdings,
        })
    }
}

/// Load configuration from the environment and initialize the global CONFIG
pub fn load_config() -> Result<(), HolderBotError> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| HolderBotError::Config("Config already initialized".to_string()))?;
    Ok(())
}

/// Access the global configuration
///
/// Panics if called before `load_config`. All call sites run after
/// startup initialization in main.
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&Config) -> R,
{
    let config = CONFIG
        .get()
        .expect("Config accessed before load_config() was called");
    f(config)
}
