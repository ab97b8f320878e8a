//! Display formatting for the rendered pages.

use chrono::{DateTime, NaiveDateTime, Utc};
use num_format::{Locale, ToFormattedString};

/// Formats a timestamp as `dd.mm.YYYY HH:MM`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d.%m.%Y %H:%M").to_string()
}

/// Same as [`format_timestamp`] for database times, which are stored without zone.
pub fn format_naive_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%d.%m.%Y %H:%M").to_string()
}

/// Formats an amount as dollars with thousands separators and two decimals, e.g. `$1,234.56`.
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_formatted_string(&Locale::en);

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    format!("{}${}.{:02}", sign, whole, cents % 100)
}

/// Shortens `text` to at most `max_chars` characters followed by `...`.
///
/// Counts characters rather than bytes so multi-byte text is never split.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
