//! Telegram bot instance management
//!
//! Handles bot creation, token validation, and message sending.

use crate::config::with_config;
use crate::logger::{self, LogTag};
use teloxide::prelude::*;
use teloxide::types::{ChatId, MessageId, ParseMode};

/// Create a Bot from the configured token and validate it via getMe
pub async fn init_bot() -> Result<Bot, String> {
    let token = with_config(|c| c.telegram_bot_token.clone());
    let bot = Bot::new(&token);

    match bot.get_me().await {
        Ok(me) => {
            logger::info(
                LogTag::Telegram,
                &format!(
                    "Bot initialized: @{} (ID: {})",
                    me.username.as_deref().unwrap_or("unknown"),
                    me.id
                ),
            );
            Ok(bot)
        }
        Err(e) => {
            logger::error(
                LogTag::Telegram,
                &format!("Failed to validate bot token: {}", e),
            );
            Err(format!("Invalid bot token: {}", e))
        }
    }
}

/// Send an HTML message, returning the sent message id for later edits
pub async fn send_html(bot: &Bot, chat_id: ChatId, text: &str) -> Result<MessageId, String> {
    let sent = bot
        .send_message(chat_id, text)
        .parse_mode(ParseMode::Html)
        .await
        .map_err(|e| format!("Failed to send message: {}", e))?;

    Ok(sent.id)
}

/// Edit a previously sent message in place
pub async fn edit_html(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    text: &str,
) -> Result<(), String> {
    bot.edit_message_text(chat_id, message_id, text)
        .parse_mode(ParseMode::Html)
        .await
        .map_err(|e| format!("Failed to edit message: {}", e))?;

    Ok(())
}
