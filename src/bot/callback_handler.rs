//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{LinkPreviewOptions, MaybeInaccessibleMessage, MessageId, ParseMode};
use tracing::{debug, warn};

use crate::api_client::JobApiClient;
use crate::config::AppConfig;
use crate::formatter::format_job_details;

use super::callback_data::CallbackToken;
use super::command_handlers::NO_JOBS_MESSAGE;
use super::ui_builder::{build_job_list_view, create_job_detail_keyboard};

/// Shown when a job picked from a list no longer exists on its page
pub const JOB_NOT_FOUND_MESSAGE: &str = "❌ Ish topilmadi.";

/// Handle callback queries from inline keyboards
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    client: Arc<JobApiClient>,
    config: Arc<AppConfig>,
) -> Result<()> {
    bot.answer_callback_query(q.id.clone()).await?;

    let data = q.data.as_deref().unwrap_or("");
    let Some(token) = CallbackToken::decode(data) else {
        warn!(user_id = %q.from.id, data = %data, "Ignoring unrecognized callback payload");
        return Ok(());
    };

    // Edit the message that carried the pressed button; without it there is
    // nothing to update
    let Some(msg) = q.message.as_ref() else {
        warn!(user_id = %q.from.id, "Callback query carries no message");
        return Ok(());
    };
    let (chat_id, message_id) = match msg {
        MaybeInaccessibleMessage::Regular(msg) => (msg.chat.id, msg.id),
        MaybeInaccessibleMessage::Inaccessible(msg) => (msg.chat.id, msg.message_id),
    };

    match token {
        CallbackToken::Page(page) => {
            show_job_list_page(&bot, chat_id, message_id, &client, &config, page).await
        }
        CallbackToken::JobDetail { id, from_page } => {
            show_job_detail(&bot, chat_id, message_id, &client, &id, from_page).await
        }
    }
}

/// Re-render the job list at the requested page in place
async fn show_job_list_page(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    client: &Arc<JobApiClient>,
    config: &Arc<AppConfig>,
    page: u32,
) -> Result<()> {
    debug!(%chat_id, page, "Rendering job list page");

    let data = client.list_jobs("", page).await;

    match build_job_list_view(&data, page, config.api.page_size) {
        Some((text, keyboard)) => {
            bot.edit_message_text(chat_id, message_id, text)
                .parse_mode(ParseMode::Html)
                .reply_markup(keyboard)
                .await?;
        }
        None => {
            bot.edit_message_text(chat_id, message_id, NO_JOBS_MESSAGE)
                .await?;
        }
    }

    Ok(())
}

/// Re-fetch the page the job was picked from, locate it by id, and render
/// the detail view
async fn show_job_detail(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    client: &Arc<JobApiClient>,
    id: &str,
    from_page: u32,
) -> Result<()> {
    debug!(%chat_id, job_id = %id, from_page, "Rendering job detail");

    let data = client.list_jobs("", from_page).await;
    let job = data
        .results
        .iter()
        .find(|j| j.id_string().as_deref() == Some(id));

    let Some(job) = job else {
        bot.edit_message_text(chat_id, message_id, JOB_NOT_FOUND_MESSAGE)
            .await?;
        return Ok(());
    };

    bot.edit_message_text(chat_id, message_id, format_job_details(job))
        .parse_mode(ParseMode::Html)
        .reply_markup(create_job_detail_keyboard(job, from_page))
        .link_preview_options(disabled_link_preview())
        .await?;

    Ok(())
}

fn disabled_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}
