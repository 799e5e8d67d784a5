//! Command Handlers module for processing bot commands

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::debug;

use crate::api_client::JobApiClient;
use crate::config::AppConfig;

use super::ui_builder::build_job_list_view;

/// Static /start greeting
pub const GREETING: &str = "Salom! 👋\n\n\
    Men ish e’lonlarini topuvchi botman.\n\
    🔎 Qidirish uchun: @IT_park_first_bot <so'rov>\n\
    📌 /latest - eng so‘nggi ishlar";

/// Shown whenever a requested list page comes back empty
pub const NO_JOBS_MESSAGE: &str = "❌ Ishlar topilmadi.";

/// Handle the /start command
pub async fn handle_start_command(bot: &Bot, msg: &Message) -> Result<()> {
    debug!(chat_id = %msg.chat.id, "Handling /start command");
    bot.send_message(msg.chat.id, GREETING).await?;
    Ok(())
}

/// Handle the /latest command: send page 1 of the job list as a new message
pub async fn handle_latest_command(
    bot: &Bot,
    msg: &Message,
    client: &Arc<JobApiClient>,
    config: &Arc<AppConfig>,
) -> Result<()> {
    debug!(chat_id = %msg.chat.id, "Handling /latest command");

    let data = client.list_jobs("", 1).await;

    match build_job_list_view(&data, 1, config.api.page_size) {
        Some((text, keyboard)) => {
            bot.send_message(msg.chat.id, text)
                .parse_mode(ParseMode::Html)
                .reply_markup(keyboard)
                .await?;
        }
        None => {
            bot.send_message(msg.chat.id, NO_JOBS_MESSAGE).await?;
        }
    }

    Ok(())
}
