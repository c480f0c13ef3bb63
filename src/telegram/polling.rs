//! Update polling and command dispatch
//!
//! Manual getUpdates long-polling with offset tracking. Each incoming
//! message is parsed for a command and dispatched inline; a slow /th
//! lookup therefore blocks this loop, which is acceptable for a
//! single-user bot.

use crate::alchemy::AlchemyClient;
use crate::logger::{self, LogTag};
use crate::telegram::bot::send_html;
use crate::telegram::commands;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Start the polling loop. Returns the task handle; signal `shutdown`
/// to stop it.
pub async fn start_polling(
    bot: Bot,
    client: Arc<AlchemyClient>,
    shutdown: Arc<Notify>,
) -> JoinHandle<()> {
    let offset = Arc::new(AtomicI64::new(0));

    tokio::spawn(async move {
        logger::info(LogTag::Telegram, "Command polling started");

        loop {
            tokio::select! {
                _ = shutdown.notified() => {
                    logger::info(LogTag::Telegram, "Command polling received shutdown signal");
                    break;
                }
                _ = poll_once(&bot, &client, &offset) => {
                    // Continue polling
                }
            }
        }

        logger::info(LogTag::Telegram, "Command polling stopped");
    })
}

/// Fetch one batch of updates and dispatch any commands
async fn poll_once(bot: &Bot, client: &AlchemyClient, offset: &Arc<AtomicI64>) {
    let current_offset = offset.load(Ordering::SeqCst);
    let mut request = bot.get_updates().timeout(10);
    if current_offset > 0 {
        request = request.offset(current_offset as i32);
    }

    match request.await {
        Ok(updates) => {
            for update in updates {
                // Advance past this update so it is not reprocessed
                offset.store(update.id.0 as i64 + 1, Ordering::SeqCst);

                if let teloxide::types::UpdateKind::Message(message) = update.kind {
                    handle_message(bot, client, &message).await;
                }
            }
        }
        Err(e) => {
            logger::debug(
                LogTag::Telegram,
                &format!("Poll error (will retry): {}", e),
            );
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    }
}

/// Split "/cmd@botname args" into the command name and its argument tail
fn parse_command(text: &str) -> Option<(&str, Option<&str>)> {
    let text = text.trim();
    if !text.starts_with('/') {
        return None;
    }

    let mut parts = text.splitn(2, char::is_whitespace);
    let command_part = parts.next()?;
    let args = parts.next().map(str::trim).filter(|a| !a.is_empty());

    // Strip the @botname suffix used in group chats
    let command = command_part[1..]
        .split('@')
        .next()
        .filter(|c| !c.is_empty())?;

    Some((command, args))
}

async fn handle_message(bot: &Bot, client: &AlchemyClient, message: &Message) {
    let user = match &message.from {
        Some(from) => from,
        None => return, // Skip messages without a sender
    };

    let (command, args) = match message.text().and_then(parse_command) {
        Some(parsed) => parsed,
        None => return,
    };

    let chat_id = message.chat.id;
    let user_id = user.id.0 as i64;

    logger::debug(
        LogTag::Telegram,
        &format!("Command /{} from user {}", command, user_id),
    );

    // /whoami always answers so users can find their id; everything
    // else requires authorization
    if command == "whoami" {
        let _ = send_html(bot, chat_id, &commands::whoami_message(user)).await;
        return;
    }

    if !commands::is_authorized_user(user_id) {
        logger::warning(
            LogTag::Telegram,
            &format!("Unauthorized /{} attempt from user {}", command, user_id),
        );
        let _ = send_html(bot, chat_id, &commands::unauthorized_message(user_id)).await;
        return;
    }

    let result = match command {
        "start" => send_html(bot, chat_id, &commands::welcome_message())
            .await
            .map(|_| ()),
        "help" => send_html(bot, chat_id, &commands::help_message())
            .await
            .map(|_| ()),
        "th" => commands::handle_top_holders(bot, client, chat_id, args).await,
        _ => Ok(()), // Unknown commands are ignored
    };

    if let Err(e) = result {
        logger::error(
            LogTag::Telegram,
            &format!("Error handling /{}: {}", command, e),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_command() {
        assert_eq!(parse_command("/start"), Some(("start", None)));
    }

    #[test]
    fn test_parse_command_with_args() {
        assert_eq!(
            parse_command("/th 0x1234567890123456789012345678901234567890"),
            Some(("th", Some("0x1234567890123456789012345678901234567890")))
        );
    }

    #[test]
    fn test_parse_command_with_bot_suffix() {
        assert_eq!(parse_command("/th@holderbot 0xabc"), Some(("th", Some("0xabc"))));
    }

    #[test]
    fn test_non_command_text_ignored() {
        assert_eq!(parse_command("hello"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("/"), None);
    }
}
