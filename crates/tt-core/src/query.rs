//! Query strategies and the classifier that picks one for a raw token.
//!
//! # Strategies
//!
//! | strategy    | match                                         |
//! |-------------|-----------------------------------------------|
//! | `Date`      | stored date equals the value                  |
//! | `Tag`       | stored tag contains the value (case-sensitive) |
//! | `Task`      | stored task contains the value (case-sensitive) |
//! | `DateRange` | `start <= date <= end`                        |
//!
//! Date-like values in single-value strategies are normalized once by the
//! storage layer before matching; the strategies themselves never look for
//! the "today" token. A task pattern keeps any wrapping quotes until after
//! that normalization, so `'today'` searches task text for the word "today".

use crate::date;

/// The marker that introduces a tag query.
pub const TAG_MARKER: char = ':';

/// A record-matching rule together with the value(s) it matches against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Exact match on the stored date.
    Date(String),
    /// Substring match on the stored tag. The leading `:` is part of the pattern.
    Tag(String),
    /// Substring match on the stored task description. The value is the raw
    /// token; see [`Query::task_pattern`].
    Task(String),
    /// Inclusive range over canonical dates.
    DateRange { start: String, end: String },
}

impl Query {
    /// Short name of the strategy, used in logs.
    pub const fn strategy_name(&self) -> &'static str {
        match self {
            Self::Date(_) => "date",
            Self::Tag(_) => "tag",
            Self::Task(_) => "task",
            Self::DateRange { .. } => "date_range",
        }
    }

    /// Turns an already-normalized task value into the substring to search for.
    pub fn task_pattern(value: &str) -> &str {
        strip_quotes(value)
    }
}

/// Picks the matching strategy for a raw query token.
///
/// First match wins:
/// 1. a token starting with `:` is a tag query;
/// 2. a token in `date_format`, or the "today" token, is a date query;
/// 3. anything else is a task query. The token is kept as typed; one wrapping
///    pair of quotes is removed when the query runs.
///
/// Classification never fails; unrecognized input is a task query.
pub fn classify(token: &str, date_format: &str) -> Query {
    if token.starts_with(TAG_MARKER) {
        Query::Tag(token.to_string())
    } else if date::parse_date(token, date_format).is_some() || date::is_today_token(token) {
        Query::Date(token.to_string())
    } else {
        Query::Task(token.to_string())
    }
}

/// Removes a single pair of matching quotes wrapping `value`.
///
/// Only one pair is removed, and only when the first and last characters are
/// the same quote character.
pub fn strip_quotes(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
