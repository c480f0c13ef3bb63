use holderbot::alchemy::AlchemyClient;
use holderbot::config::{load_config, with_config};
use holderbot::logger::{self, LogTag};
use holderbot::telegram;
use holderbot::webserver;
use std::sync::Arc;
use tokio::sync::Notify;

/// Main entry point for holderbot
///
/// Startup order:
/// 1. Load .env and environment configuration
/// 2. Initialize the logger
/// 3. Start the health check server when PORT is set
/// 4. Validate the bot token and start command polling
///
/// Ctrl-C signals the polling loop to stop, then the process exits.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logger::init();

    logger::info(LogTag::System, "🚀 Token Holder Analysis Bot starting up...");

    if let Err(e) = load_config() {
        logger::error(LogTag::Config, &format!("Fatal error: {}", e));
        std::process::exit(1);
    }

    // Health check server for hosting platforms (Render sets PORT)
    if let Some(port) = with_config(|c| c.health_port) {
        webserver::start_health_server(port).map_err(anyhow::Error::msg)?;
    } else {
        logger::info(
            LogTag::Health,
            "PORT not set, health server disabled (local development)",
        );
    }

    let api_key = with_config(|c| c.alchemy_api_key.clone());
    let client = Arc::new(AlchemyClient::new(&api_key).map_err(|e| anyhow::anyhow!("{}", e))?);

    let bot = telegram::init_bot().await.map_err(anyhow::Error::msg)?;

    let shutdown = Arc::new(Notify::new());
    let polling_handle = telegram::start_polling(bot, client, shutdown.clone()).await;

    logger::info(LogTag::System, "Bot running, press Ctrl+C to stop");

    tokio::signal::ctrl_c().await?;
    logger::info(LogTag::System, "Shutdown signal received");

    shutdown.notify_waiters();
    let _ = polling_handle.await;

    logger::info(LogTag::System, "Bot stopped");
    Ok(())
}
