//! UI Builder module for creating keyboards and formatting list messages

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::api_client::{JobRecord, PageResult};
use crate::formatter::{is_new_job, truncate_chars};

use super::callback_data::CallbackToken;

/// Landing page used when a job carries no usable URL
pub const FALLBACK_URL: &str = "https://t.me/IT_park_first_bot";

/// Telegram renders roughly this many characters on one button row
const BUTTON_LABEL_LIMIT: usize = 64;

/// Header line above the job-list keyboard
pub fn job_list_header(page: u32) -> String {
    format!("📋 Eng so‘nggi ishlar — <b>{page}-sahifa</b>")
}

/// Build the list view for one page: header text plus a keyboard with one
/// button per job and a navigation row. Returns `None` when the page holds
/// no jobs.
pub fn build_job_list_view(
    data: &PageResult,
    page: u32,
    page_size: usize,
) -> Option<(String, InlineKeyboardMarkup)> {
    let count = data.results.len().min(page_size);
    let jobs = &data.results[..count];
    if jobs.is_empty() {
        return None;
    }

    let keyboard = create_job_list_keyboard(jobs, page, data.has_next());
    Some((job_list_header(page), keyboard))
}

/// Create the inline keyboard for a page of jobs: one callback button per
/// job, then a prev/next navigation row when adjacent pages exist
pub fn create_job_list_keyboard(
    jobs: &[JobRecord],
    page: u32,
    has_next: bool,
) -> InlineKeyboardMarkup {
    let mut keyboard = Vec::new();

    for job in jobs {
        let prefix = if is_new_job(job.scraped_at()) {
            "🆕 "
        } else {
            ""
        };
        let label = truncate_chars(
            &format!("{prefix}{} @{}", job.title(), job.company()),
            BUTTON_LABEL_LIMIT,
        );
        let token = CallbackToken::JobDetail {
            id: job.id_string().unwrap_or_default(),
            from_page: page,
        };
        keyboard.push(vec![InlineKeyboardButton::callback(label, token.encode())]);
    }

    let mut nav = Vec::new();
    if page > 1 {
        nav.push(InlineKeyboardButton::callback(
            "⬅️ Oldingi",
            CallbackToken::Page(page - 1).encode(),
        ));
    }
    if has_next {
        nav.push(InlineKeyboardButton::callback(
            "Keyingi ➡️",
            CallbackToken::Page(page + 1).encode(),
        ));
    }
    if !nav.is_empty() {
        keyboard.push(nav);
    }

    InlineKeyboardMarkup::new(keyboard)
}

/// Create the detail-view keyboard: the job URL on top, back-to-list below
pub fn create_job_detail_keyboard(job: &JobRecord, from_page: u32) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![job_url_button(job.url())],
        vec![InlineKeyboardButton::callback(
            "🔙 Orqaga",
            CallbackToken::Page(from_page).encode(),
        )],
    ])
}

/// URL button for opening a job posting; absent or unparseable URLs fall
/// back to the bot's landing page
pub fn job_url_button(url: &str) -> InlineKeyboardButton {
    let target = reqwest::Url::parse(url)
        .or_else(|_| reqwest::Url::parse(FALLBACK_URL))
        .expect("fallback URL parses");
    InlineKeyboardButton::url("🌐 Ishni ochish", target)
}
