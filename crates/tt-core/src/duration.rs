//! Elapsed-time computation between two times of day.

use chrono::NaiveTime;

use crate::InputError;

/// Format for 12-hour clock times with a meridiem marker (e.g. `9:30AM`).
const TWELVE_HOUR_FORMAT: &str = "%I:%M%p";

/// Format for 24-hour clock times (e.g. `21:30`).
const TWENTY_FOUR_HOUR_FORMAT: &str = "%H:%M";

/// Parses a single time of day.
///
/// Values containing `AM` or `PM` are read on the 12-hour clock, everything
/// else on the 24-hour clock. The marker check is case-sensitive.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, InputError> {
    let format = if value.contains("AM") || value.contains("PM") {
        TWELVE_HOUR_FORMAT
    } else {
        TWENTY_FOUR_HOUR_FORMAT
    };
    NaiveTime::parse_from_str(value, format).map_err(|source| InputError::InvalidTime {
        value: value.to_string(),
        source,
    })
}

/// Returns the minutes elapsed from `start` to `end`.
///
/// Each side is parsed independently, so the two may use different clock
/// formats. There is no wrap at midnight: an `end` earlier in the day than
/// `start` yields a negative count.
pub fn duration_minutes(start: &str, end: &str) -> Result<i64, InputError> {
    let start = parse_time_of_day(start)?;
    let end = parse_time_of_day(end)?;
    Ok((end - start).num_minutes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_four_hour_pair() {
        assert_eq!(duration_minutes("10:00", "12:00").unwrap(), 120);
        assert_eq!(duration_minutes("14:00", "16:00").unwrap(), 120);
        assert_eq!(duration_minutes("08:05", "08:50").unwrap(), 45);
    }

    #[test]
    fn twelve_hour_pair() {
        assert_eq!(duration_minutes("09:30AM", "10:15AM").unwrap(), 45);
        assert_eq!(duration_minutes("9:30AM", "10:30AM").unwrap(), 60);
        assert_eq!(duration_minutes("11:45AM", "1:15PM").unwrap(), 90);
        assert_eq!(duration_minutes("12:00AM", "12:00PM").unwrap(), 720);
    }

    #[test]
    fn mixed_formats_are_parsed_independently() {
        assert_eq!(duration_minutes("09:00AM", "13:30").unwrap(), 270);
        assert_eq!(duration_minutes("13:00", "2:00PM").unwrap(), 60);
    }

    #[test]
    fn end_before_start_is_negative() {
        assert_eq!(duration_minutes("23:00", "01:00").unwrap(), -1320);
        assert_eq!(duration_minutes("10:15AM", "09:30AM").unwrap(), -45);
    }

    #[test]
    fn malformed_times_are_rejected() {
        let err = duration_minutes("ten", "12:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid time: ten");

        let err = duration_minutes("10:00", "25:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid time: 25:00");

        // Lowercase markers are not recognized, so this falls to the 24-hour parser.
        assert!(duration_minutes("9:30am", "10:00").is_err());
    }
}
