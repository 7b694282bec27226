use crate::domain::ContentRecord;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// What a card shows when `created_at` can't be read as a date.
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Escapes text for safe use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a stored timestamp as a short US-style date, e.g. `3/1/2024`.
pub fn format_display_date(created_at: &str) -> String {
    match parse_timestamp(created_at) {
        Some(dt) => dt.format(DISPLAY_DATE_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    // RFC3339 carries an offset, normalize to UTC
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

// title is text and gets escaped, content is trusted markup and goes in verbatim
pub(crate) fn push_card<R: ContentRecord>(html: &mut String, record: &R) {
    html.push_str(&format!(
        r#"<article data-id="{}" class="border p-4 my-2 rounded-lg shadow-md">"#,
        record.id()
    ));
    html.push_str(&format!(
        r#"<h2 class="text-xl font-semibold">{}</h2>"#,
        escape_html(record.title())
    ));
    html.push_str(&format!(
        r#"<p class="text-gray-600">{}</p>"#,
        format_display_date(record.created_at())
    ));
    html.push_str("<div>");
    html.push_str(record.content());
    html.push_str("</div>");
    html.push_str("</article>");
}
