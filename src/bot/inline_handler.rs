//! Inline query handler: search jobs from any chat via @bot-mention

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{
    InlineKeyboardMarkup, InlineQuery, InlineQueryResult, InlineQueryResultArticle,
    InputMessageContent, InputMessageContentText, ParseMode,
};
use tracing::debug;
use uuid::Uuid;

use crate::api_client::{JobApiClient, JobRecord};
use crate::formatter::format_inline_message;

use super::ui_builder::job_url_button;

/// Telegram-side result cache, kept short so fresh postings show up quickly
const INLINE_CACHE_SECS: u32 = 5;

pub const NOTHING_FOUND_TITLE: &str = "❌ Hech narsa topilmadi";
pub const NOTHING_FOUND_TEXT: &str = "Kechirasiz, ish topilmadi.";

/// Handle an inline query: search term from the query text, page from the
/// round-tripped offset string
pub async fn inline_query_handler(bot: Bot, q: InlineQuery, client: Arc<JobApiClient>) -> Result<()> {
    let search = q.query.trim();
    let page: u32 = q.offset.parse().unwrap_or(1);

    debug!(user_id = %q.from.id, search = %search, page, "Handling inline query");

    let data = client.list_jobs(search, page).await;

    if data.results.is_empty() {
        let nothing_found = InlineQueryResultArticle::new(
            Uuid::new_v4().to_string(),
            NOTHING_FOUND_TITLE,
            InputMessageContent::Text(InputMessageContentText::new(NOTHING_FOUND_TEXT)),
        );
        bot.answer_inline_query(q.id, vec![InlineQueryResult::Article(nothing_found)])
            .cache_time(INLINE_CACHE_SECS)
            .is_personal(true)
            .await?;
        return Ok(());
    }

    let articles: Vec<InlineQueryResult> = data
        .results
        .iter()
        .map(|job| InlineQueryResult::Article(build_inline_result(job)))
        .collect();

    // An empty offset tells the client pagination is over
    let next_offset = if data.has_next() {
        (page + 1).to_string()
    } else {
        String::new()
    };

    bot.answer_inline_query(q.id, articles)
        .cache_time(INLINE_CACHE_SECS)
        .is_personal(true)
        .next_offset(next_offset)
        .await?;

    Ok(())
}

/// Build one selectable inline article for a job
fn build_inline_result(job: &JobRecord) -> InlineQueryResultArticle {
    let title = html_escape::encode_text(job.title()).to_string();
    let content = InputMessageContentText::new(format_inline_message(job)).parse_mode(ParseMode::Html);

    InlineQueryResultArticle::new(
        Uuid::new_v4().to_string(),
        title,
        InputMessageContent::Text(content),
    )
    .description(format!("{} • {}", job.company(), job.url()))
    .reply_markup(InlineKeyboardMarkup::new(vec![vec![job_url_button(
        job.url(),
    )]]))
}
