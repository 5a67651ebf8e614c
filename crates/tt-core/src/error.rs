//! Input validation errors.

use thiserror::Error;

/// A user-supplied value could not be interpreted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A time of day did not match the 12-hour or 24-hour clock format.
    #[error("invalid time: {value}")]
    InvalidTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A date was neither the "today" token nor a date in the expected format.
    #[error("invalid date: {value}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
