//! Text sanitization and display formatting for job records
//!
//! Pure functions only. Missing or malformed input degrades to sentinel
//! text; nothing in this module returns an error.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;

use crate::api_client::JobRecord;

/// Telegram message-size bound for the detail view
const DETAIL_TEXT_LIMIT: usize = 4000;
/// Description budget for inline results
const INLINE_DESCRIPTION_LIMIT: usize = 3000;
/// Jobs scraped within this window get the 🆕 badge
const NEW_JOB_WINDOW_SECS: i64 = 86_400;

lazy_static! {
    static ref HTML_TAG_RE: Regex = Regex::new(r"<[^>]*>").expect("valid HTML tag pattern");
}

/// Parse an ISO-8601 timestamp, keeping the clock time exactly as written.
/// Offsets are accepted but not converted; the offset is dropped.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    None
}

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM`.
///
/// Empty input yields `"Unknown"`; unparseable input is returned unchanged.
pub fn format_time(iso_time: &str) -> String {
    if iso_time.is_empty() {
        return "Unknown".to_string();
    }
    match parse_timestamp(iso_time) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => iso_time.to_string(),
    }
}

/// Whether a job was scraped less than 24 hours ago.
///
/// The timestamp's offset, if any, is stripped and the naive clock time is
/// compared against the naive local clock. False for absent or malformed
/// input.
pub fn is_new_job(scraped_at: &str) -> bool {
    if scraped_at.is_empty() {
        return false;
    }
    match parse_timestamp(scraped_at) {
        Some(scraped) => {
            let diff = Local::now().naive_local() - scraped;
            diff.num_seconds() < NEW_JOB_WINDOW_SECS
        }
        None => false,
    }
}

/// Strip HTML markup down to its text content, decode entities, turn the
/// two-character literal `\n` sequence into a real newline, and drop
/// carriage returns.
pub fn clean_text(text: &str) -> String {
    let stripped = HTML_TAG_RE.replace_all(text, "");
    let decoded = html_escape::decode_html_entities(stripped.as_ref());
    decoded.replace("\\n", "\n").replace('\r', "")
}

/// Truncate to at most `max_chars` characters, never splitting a character.
/// Descriptions and button labels here are Uzbek/Cyrillic, so byte slicing
/// is not an option.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Build the HTML detail view for one job, bounded to 4000 characters
pub fn format_job_details(job: &JobRecord) -> String {
    let title = html_escape::encode_text(job.title());
    let company = html_escape::encode_text(job.company());
    let posted = format_time(job.posted_at());
    let url = job.url();
    let description = clean_text(job.description());

    let mut text = format!(
        "💼 <b>{title}</b>\n🏢 <i>{company}</i>\n🕒 {posted}\n\n{description}\n"
    );
    if !url.is_empty() {
        text.push_str(&format!("\n👉 <a href='{url}'>Apply here</a>"));
    }

    truncate_chars(&text, DETAIL_TEXT_LIMIT)
}

/// Build the HTML message body for an inline result.
///
/// The description is cut to 3000 characters before escaping; the ellipsis
/// check runs against the already-cut string.
pub fn format_inline_message(job: &JobRecord) -> String {
    let title = html_escape::encode_text(job.title());
    let company = html_escape::encode_text(job.company());
    let posted = format_time(job.posted_at());

    let desc = truncate_chars(
        &clean_text(job.description.as_deref().unwrap_or("")),
        INLINE_DESCRIPTION_LIMIT,
    );
    let suffix = if desc.chars().count() > INLINE_DESCRIPTION_LIMIT {
        "..."
    } else {
        ""
    };
    let short_desc = html_escape::encode_text(&format!("{desc}{suffix}")).to_string();

    format!("💼 <b>{title}</b>\n🏢 <i>{company}</i>\n📅 {posted}\n\n📝 {short_desc}")
}
