//! Display formatting for dates, prices, percentages and durations.
//!
//! Output follows Russian locale conventions: `dd.mm.yyyy` dates, a
//! no-break space as thousands separator and a decimal comma for money.
//! Timestamps are rendered in the offset they carry; there is no browser
//! timezone lookup so server and client renders agree.
//!
//! Unparseable timestamps are returned verbatim rather than as an error.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

const GROUP_SEPARATOR: char = '\u{a0}';

const SHORT_MONTHS: [&str; 12] = [
    "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.", "дек.",
];

/// Parse an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS` or a bare date.
fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(PrimitiveDateTime::new(parsed.date(), parsed.time()));
    }
    if let Ok(parsed) = PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")) {
        return Some(parsed);
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(Date::midnight)
}

/// `2025-10-05T12:00:00Z` → `05.10.2025`.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .and_then(|ts| ts.format(format_description!("[day].[month].[year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// `2025-10-05T09:07:03Z` → `05.10.2025, 09:07:03`.
pub fn format_date_time(raw: &str) -> String {
    parse_timestamp(raw)
        .and_then(|ts| {
            ts.format(format_description!("[day].[month].[year], [hour]:[minute]:[second]"))
                .ok()
        })
        .unwrap_or_else(|| raw.to_owned())
}

/// Short axis label: `2025-10-05` → `5 окт.`.
pub fn format_day_month(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => {
            let month = SHORT_MONTHS[usize::from(u8::from(ts.month())) - 1];
            format!("{} {month}", ts.day())
        }
        None => raw.to_owned(),
    }
}

/// Group integer digits in threes and join with a decimal comma.
fn group_decimal(rendered: &str, negative: bool) -> String {
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered, None),
    };

    let mut out = String::with_capacity(rendered.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part.filter(|f| !f.is_empty()) {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// `1234567.5` → `1 234 567,5`, at most three fraction digits.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rendered = format!("{:.3}", value.abs());
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    let negative = value < 0.0 && trimmed != "0";
    group_decimal(trimmed, negative)
}

/// `1234.5` → `1 234,50`, always two fraction digits.
pub fn format_price_fixed(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rendered = format!("{:.2}", value.abs());
    let negative = value < 0.0 && rendered != "0.00";
    group_decimal(&rendered, negative)
}

/// `45.5, 2` → `45.50%`.
pub fn format_percent(value: f64, digits: usize) -> String {
    format!("{value:.digits$}%")
}

/// Average review duration label.
///
/// The service reports seconds, but the value is divided by 3600 and then
/// labelled as minutes, so 7200 renders as "2 мин". Kept as observed; see
/// the flagged case in the tests.
pub fn format_review_time(seconds: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let minutes = (seconds / 3600.0).floor() as i64;
    if minutes < 60 {
        return format!("{minutes} мин");
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 { format!("{hours}ч {mins}мин") } else { format!("{hours}ч") }
}
