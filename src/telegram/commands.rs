//! Command handlers: /start, /help, /th, /whoami
//!
//! Every command except /whoami is gated on the configured authorized
//! user id. Handlers build HTML responses; the /th handler drives the
//! whole fetch -> fold -> rank pipeline and edits its "analyzing"
//! message in place with the result.

use crate::alchemy::AlchemyClient;
use crate::config::with_config;
use crate::holders;
use crate::logger::{self, LogTag};
use crate::telegram::bot::{edit_html, send_html};
use crate::telegram::formatters::{format_holders_response, html_escape};
use crate::utils::is_valid_address;
use teloxide::prelude::*;
use teloxide::types::{ChatId, User};

/// Check a Telegram user id against the configured authorized user
pub fn is_authorized_user(user_id: i64) -> bool {
    with_config(|c| c.authorized_user_id) == user_id
}

pub fn unauthorized_message(user_id: i64) -> String {
    format!(
        "🚫 <b>Access Denied</b>\n\n\
         This bot is private and only available to authorized users.\n\n\
         Your User ID: <code>{}</code>\n\n\
         If you believe this is an error, please contact the bot owner.",
        user_id
    )
}

pub fn welcome_message() -> String {
    "🤖 <b>Token Holder Analysis Bot</b>\n\n\
     Welcome! I can analyze the top holders of any token on Abstract Chain.\n\n\
     <b>Commands:</b>\n\
     • /th &lt;token_address&gt; - Get top holders of a token\n\
     • /help - Show this help message\n\
     • /whoami - Show your user information\n\n\
     <b>Example:</b>\n\
     <code>/th 0x1234567890123456789012345678901234567890</code>"
        .to_string()
}

pub fn help_message() -> String {
    "🔍 <b>How to use this bot:</b>\n\n\
     <b>Command:</b> <code>/th &lt;token_address&gt;</code>\n\n\
     <b>What I'll show you:</b>\n\
     • Top holders by balance\n\
     • Each holder's token balance\n\
     • Addresses are shortened for readability\n\n\
     <b>Example:</b>\n\
     <code>/th 0x1234567890123456789012345678901234567890</code>\n\n\
     <b>Note:</b> Analysis is performed on Abstract Chain (Chain ID: 2741)\n\n\
     <b>Tips:</b>\n\
     • Make sure the token address is valid (42 characters, starts with 0x)\n\
     • Analysis may take 10-30 seconds for tokens with many transfers"
        .to_string()
}

pub fn whoami_message(user: &User) -> String {
    let user_id = user.id.0 as i64;
    let authorized = is_authorized_user(user_id);
    let status = if authorized {
        "✅ <b>Authorized</b>"
    } else {
        "❌ <b>Not Authorized</b>"
    };

    format!(
        "👤 <b>User Information</b>\n\n\
         <b>Name:</b> {} {}\n\
         <b>Username:</b> @{}\n\
         <b>User ID:</b> <code>{}</code>\n\
         <b>Status:</b> {}\n\n\
         <b>Bot Access:</b> {}",
        html_escape(&user.first_name),
        html_escape(user.last_name.as_deref().unwrap_or("")),
        html_escape(user.username.as_deref().unwrap_or("N/A")),
        user_id,
        status,
        if authorized { "Granted" } else { "Denied" }
    )
}

pub fn usage_message() -> String {
    "❌ Please provide a token address.\n\n\
     <b>Usage:</b> <code>/th &lt;token_address&gt;</code>\n\
     <b>Example:</b> <code>/th 0x1234567890123456789012345678901234567890</code>"
        .to_string()
}

pub fn invalid_address_message() -> String {
    "❌ Invalid token address format.\n\n\
     Please provide a valid Ethereum address (42 characters, starting with 0x)"
        .to_string()
}

pub fn no_holders_message() -> String {
    "❌ No holders found for this token.\n\n\
     This could mean:\n\
     • Token address is incorrect\n\
     • Token has no transfers yet\n\
     • Token is not on Abstract Chain"
        .to_string()
}

pub fn analysis_error_message(error: &str) -> String {
    format!(
        "❌ <b>Error analyzing token:</b>\n\n\
         <code>{}</code>\n\n\
         <b>Possible causes:</b>\n\
         • Invalid token address\n\
         • Token not on Abstract Chain\n\
         • API rate limit reached\n\
         • Network connectivity issues",
        html_escape(error)
    )
}

/// Handle /th: validate, fetch, and report top holders
pub async fn handle_top_holders(
    bot: &Bot,
    client: &AlchemyClient,
    chat_id: ChatId,
    args: Option<&str>,
) -> Result<(), String> {
    let token_address = match args.map(str::trim).filter(|a| !a.is_empty()) {
        Some(addr) => addr.to_string(),
        None => {
            send_html(bot, chat_id, &usage_message()).await?;
            return Ok(());
        }
    };

    // Reject malformed input before any API call
    if !is_valid_address(&token_address) {
        send_html(bot, chat_id, &invalid_address_message()).await?;
        return Ok(());
    }

    let processing_id = send_html(
        bot,
        chat_id,
        "🔍 Analyzing token holders...\n\
         This may take 10-30 seconds depending on transfer volume.",
    )
    .await?;

    let (top_n, show_holdings) =
        with_config(|c| (c.top_holders_count, c.show_other_holdings));

    let metadata = holders::get_token_info(client, &token_address).await;

    let top_holders = match holders::get_top_holders(client, &token_address, top_n).await {
        Ok(top_holders) => top_holders,
        Err(e) => {
            logger::error(
                LogTag::Telegram,
                &format!("Error in top holders command: {}", e),
            );
            edit_html(
                bot,
                chat_id,
                processing_id,
                &analysis_error_message(&e.to_string()),
            )
            .await?;
            return Ok(());
        }
    };

    if top_holders.is_empty() {
        edit_html(bot, chat_id, processing_id, &no_holders_message()).await?;
        return Ok(());
    }

    let holdings = if show_holdings {
        let mut per_holder = Vec::with_capacity(top_holders.len());
        for holder in &top_holders {
            per_holder
                .push(holders::significant_holdings(client, &holder.address, &token_address).await);
        }
        Some(per_holder)
    } else {
        None
    };

    let response =
        format_holders_response(&token_address, &metadata, &top_holders, holdings.as_deref());

    edit_html(bot, chat_id, processing_id, &response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_message_contains_user_id() {
        let msg = unauthorized_message(12345);
        assert!(msg.contains("Access Denied"));
        assert!(msg.contains("<code>12345</code>"));
    }

    #[test]
    fn test_welcome_lists_commands() {
        let msg = welcome_message();
        assert!(msg.contains("/th"));
        assert!(msg.contains("/help"));
        assert!(msg.contains("/whoami"));
    }

    #[test]
    fn test_help_mentions_chain() {
        assert!(help_message().contains("2741"));
    }

    #[test]
    fn test_no_holders_message_lists_causes() {
        let msg = no_holders_message();
        assert!(msg.contains("no transfers"));
    }

    #[test]
    fn test_error_message_escapes_html() {
        let msg = analysis_error_message("bad <tag> & more");
        assert!(msg.contains("bad &lt;tag&gt; &amp; more"));
    }
}
