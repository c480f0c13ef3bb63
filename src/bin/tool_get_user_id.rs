//! Report the Telegram user id of anyone who messages the bot
//!
//! First-time setup helper: run it, send the bot any message, and copy
//! the reported id into AUTHORIZED_USER_ID. Stops on Ctrl-C.

use holderbot::logger::{self, LogTag};
use holderbot::telegram::html_escape;
use std::sync::atomic::{AtomicI64, Ordering};
use teloxide::prelude::*;
use teloxide::types::{ParseMode, UpdateKind, User};

fn user_info_message(user: &User) -> String {
    let user_id = user.id.0 as i64;
    format!(
        "👤 <b>Your Telegram Information:</b>\n\n\
         <b>Name:</b> {} {}\n\
         <b>Username:</b> @{}\n\
         <b>User ID:</b> <code>{}</code>\n\n\
         📝 <b>To authorize this bot:</b>\n\
         Add <code>AUTHORIZED_USER_ID={}</code> to your .env file and restart the bot.",
        html_escape(&user.first_name),
        html_escape(user.last_name.as_deref().unwrap_or("")),
        html_escape(user.username.as_deref().unwrap_or("N/A")),
        user_id,
        user_id
    )
}

async fn poll_once(bot: &Bot, offset: &AtomicI64) {
    let current_offset = offset.load(Ordering::SeqCst);
    let mut request = bot.get_updates().timeout(10);
    if current_offset > 0 {
        request = request.offset(current_offset as i32);
    }

    let updates = match request.await {
        Ok(updates) => updates,
        Err(e) => {
            logger::debug(
                LogTag::Telegram,
                &format!("Poll error (will retry): {}", e),
            );
            tokio::time::sleep(std::time::Duration::from_secs(1)).await;
            return;
        }
    };

    for update in updates {
        offset.store(update.id.0 as i64 + 1, Ordering::SeqCst);

        let message = match update.kind {
            UpdateKind::Message(message) => message,
            _ => continue,
        };

        let user = match &message.from {
            Some(from) => from,
            None => continue,
        };

        logger::info(
            LogTag::Telegram,
            &format!(
                "Message from {} (@{}); add AUTHORIZED_USER_ID={} to your .env file",
                user.first_name,
                user.username.as_deref().unwrap_or("N/A"),
                user.id.0
            ),
        );

        let send = bot
            .send_message(message.chat.id, user_info_message(user))
            .parse_mode(ParseMode::Html)
            .await;
        if let Err(e) = send {
            logger::warning(LogTag::Telegram, &format!("Failed to reply: {}", e));
        }
    }
}

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
    let offset = AtomicI64::new(0);

    logger::info(
        LogTag::Telegram,
        "User ID helper running: message the bot to see your id, Ctrl+C to stop",
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                logger::info(LogTag::Telegram, "User ID helper stopped");
                break;
            }
            _ = poll_once(&bot, &offset) => {}
        }
    }
}
