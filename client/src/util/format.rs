//! Table cell formatting.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{NaiveDate, NaiveDateTime};

/// Shown in place of missing values.
pub const PLACEHOLDER: &str = "—";

pub fn handle(username: &str) -> String {
    format!("@{username}")
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

pub fn date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub fn last_scraped(value: Option<NaiveDateTime>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_owned(), |ts| ts.format("%Y-%m-%d %H:%M").to_string())
}

pub fn text_or_placeholder(value: &str) -> String {
    if value.is_empty() { PLACEHOLDER.to_owned() } else { value.to_owned() }
}
