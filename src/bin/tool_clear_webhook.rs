//! Clear the Telegram bot webhook and drop pending updates
//!
//! Run this when switching between webhook and polling modes, or when
//! multiple bot instances conflict over updates.

use holderbot::logger::{self, LogTag};
use teloxide::prelude::*;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    logger::init();

    let token = match std::env::var("TELEGRAM_BOT_TOKEN") {
        Ok(t) if !t.is_empty() => t,
        _ => {
            logger::error(
                LogTag::Config,
                "TELEGRAM_BOT_TOKEN not found in environment variables",
            );
            std::process::exit(1);
        }
    };

    let bot = Bot::new(&token);

    match bot.delete_webhook().drop_pending_updates(true).await {
        Ok(_) => logger::info(LogTag::Telegram, "Webhook cleared"),
        Err(e) => {
            logger::error(LogTag::Telegram, &format!("Failed to clear webhook: {}", e));
            std::process::exit(1);
        }
    }

    // Verify the connection still works after clearing
    match bot.get_me().await {
        Ok(me) => logger::info(
            LogTag::Telegram,
            &format!(
                "Bot info: @{} ({})",
                me.username.as_deref().unwrap_or("unknown"),
                me.first_name
            ),
        ),
        Err(e) => logger::warning(LogTag::Telegram, &format!("getMe failed: {}", e)),
    }

    logger::info(
        LogTag::Telegram,
        "✅ Webhook cleared successfully! You can now start your bot.",
    );
}
