//! Calendar date handling for records and queries.
//!
//! Dates are stored as text in the canonical `YYYY/MM/DD` form. Because every
//! component is zero-padded, lexicographic ordering of stored dates matches
//! chronological ordering, which the date-range query relies on.

use chrono::{Local, NaiveDate};

use crate::InputError;

/// The canonical `strftime` format for stored dates.
pub const CANONICAL_DATE_FORMAT: &str = "%Y/%m/%d";

/// The literal token that stands for the current local date.
pub const TODAY_TOKEN: &str = "today";

/// Returns the current date on the host's local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns true if `token` is the "today" keyword, ignoring ASCII case.
pub fn is_today_token(token: &str) -> bool {
    token.eq_ignore_ascii_case(TODAY_TOKEN)
}

/// Parses `value` with the given date format.
///
/// Returns `None` if it does not parse. Non-padded components such as
/// `2023/1/5` are accepted and re-normalized by [`format_date`].
pub fn parse_date(value: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, format).ok()
}

/// Formats a date with the given format.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

/// Normalizes a query value against the date format.
///
/// A value that parses as a date is re-formatted, the "today" token becomes
/// `today`, and anything else is returned unchanged.
pub fn normalize_query_value(value: &str, format: &str, today: NaiveDate) -> String {
    if let Some(date) = parse_date(value, format) {
        format_date(date, format)
    } else if is_today_token(value) {
        format_date(today, format)
    } else {
        value.to_string()
    }
}

/// Resolves a user-supplied date that must denote a real day.
///
/// Accepts the "today" token or a date in `format`. Used wherever a date is
/// about to be stored or used as a range bound.
pub fn resolve_date(value: &str, format: &str, today: NaiveDate) -> Result<NaiveDate, InputError> {
    if is_today_token(value) {
        return Ok(today);
    }
    NaiveDate::parse_from_str(value, format).map_err(|source| InputError::InvalidDate {
        value: value.to_string(),
        source,
    })
}
