//! Shared formatting utilities for the rendering layer.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Renders a 1–5 rating as a run of stars.
///
/// Out-of-range values are clamped so display never exceeds five stars.
#[must_use]
pub fn stars(rating: u8) -> String {
    "★".repeat(usize::from(rating.min(5)))
}

/// Formats a backend timestamp for display as a plain date.
///
/// The backend's `created_at` strings vary by deployment (RFC 3339 from some,
/// `YYYY-MM-DD HH:MM:SS` from others), so parsing is best-effort: the raw
/// string is returned untouched when nothing matches.
#[must_use]
pub fn format_review_date(raw: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.format("%Y-%m-%d").to_string();
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return timestamp.format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// Truncates text to a display width, appending an ellipsis when cut.
///
/// Counts characters, not bytes, so multibyte titles survive.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let cut: String = text.chars().take(keep).collect();
    format!("{cut}...")
}
