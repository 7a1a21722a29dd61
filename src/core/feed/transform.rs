use chrono::{DateTime, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{FeedPost, ProxyEntry};

const PREVIEW_CHAR_LIMIT: usize = 150;
const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

// Tag-like substrings, not an HTML parser.
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern must compile"));
static IMG_SRC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<img[^>]+src="([^">]+)""#).expect("img pattern must compile"));

pub fn post_from_entry(entry: &ProxyEntry) -> FeedPost {
    let body = entry
        .content
        .as_deref()
        .filter(|content| !content.trim().is_empty())
        .unwrap_or(&entry.description);

    FeedPost {
        title: entry.title.clone(),
        date: format_display_date(&entry.pub_date),
        preview: build_preview(&entry.description),
        link: entry.link.clone(),
        thumbnail: extract_thumbnail(body),
    }
}

pub fn strip_markup(text: &str) -> String {
    TAG_PATTERN.replace_all(text, "").into_owned()
}

// The ellipsis is appended even when the stripped text is already shorter
// than the limit.
pub fn build_preview(description: &str) -> String {
    let stripped = strip_markup(description);
    let truncated: String = stripped.chars().take(PREVIEW_CHAR_LIMIT).collect();
    format!("{truncated}...")
}

pub fn extract_thumbnail(body: &str) -> String {
    IMG_SRC_PATTERN
        .captures(body)
        .and_then(|captures| captures.get(1))
        .map(|source| source.as_str().to_string())
        .unwrap_or_default()
}

pub fn format_display_date(raw: &str) -> String {
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return parsed.format(DISPLAY_DATE_FORMAT).to_string();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return parsed.format(DISPLAY_DATE_FORMAT).to_string();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY_DATE_FORMAT).to_string();
    }
    raw.to_string()
}
