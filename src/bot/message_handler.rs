//! Message handler module routing incoming text to the command handlers

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

use crate::api_client::JobApiClient;
use crate::config::AppConfig;

use super::command_handlers::{handle_latest_command, handle_start_command};

/// Route an incoming message. Only the two commands are handled; everything
/// else is ignored.
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    client: Arc<JobApiClient>,
    config: Arc<AppConfig>,
) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let text = text.trim();

    if text == "/start" {
        handle_start_command(&bot, &msg).await?;
    } else if text == "/latest" {
        handle_latest_command(&bot, &msg, &client, &config).await?;
    } else {
        debug!(chat_id = %msg.chat.id, "Ignoring non-command message");
    }

    Ok(())
}
