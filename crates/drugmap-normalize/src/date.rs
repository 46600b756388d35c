//! Date parsing for the spellings found in publication exports.
//!
//! Slash dates are read day-first (`25/05/2020`), matching the European
//! registries the clinical-trial exports come from.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::DateFormatError;

/// Date-only formats, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",   // 2020-01-01
    "%d/%m/%Y",   // 25/05/2020
    "%Y/%m/%d",   // 2020/05/25
    "%d.%m.%Y",   // 25.05.2020
    "%Y.%m.%d",   // 2020.05.25
    "%d-%m-%Y",   // 25-05-2020
    "%B %d, %Y",  // January 1, 2020 (also Jan 1, 2020)
    "%d %B %Y",   // 1 January 2020 (also 1 Jan 2020)
];

/// Date-time formats whose date part is kept.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses a raw date string into a calendar date.
///
/// Surrounding whitespace is ignored and inner runs are collapsed. Month names
/// are matched case-insensitively.
///
/// # Errors
///
/// Returns [`DateFormatError`] when the value is empty or matches no supported
/// format. No default date is ever substituted.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateFormatError> {
    let compact = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if compact.is_empty() {
        return Err(DateFormatError::new(value));
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&compact, fmt) {
            return Ok(date);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(&compact, fmt) {
            return Ok(datetime.date());
        }
    }

    Err(DateFormatError::new(value))
}

/// Formats a date in the canonical `YYYY-MM-DD` form.
///
/// This is the form the graph document carries, and the one log events use.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
