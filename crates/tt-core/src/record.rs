//! Time record types.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored work interval.
///
/// Records are immutable once written. `duration` is derived from the start
/// and end times at insert and is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRecord {
    pub id: i64,
    /// Date in canonical `YYYY/MM/DD` form.
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub task: String,
    pub tag: String,
    /// Elapsed minutes from `start_time` to `end_time`. Negative when the end
    /// is earlier in the day than the start.
    pub duration: i64,
}

impl fmt::Display for TimeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {}-{} ({} min) {} {}",
            self.id, self.date, self.start_time, self.end_time, self.duration, self.tag, self.task
        )
    }
}

/// A record about to be inserted.
///
/// The date has already been resolved; times are kept as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub task: String,
    pub tag: String,
}

impl NewRecord {
    pub fn new(
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        task: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            date,
            start_time: start_time.into(),
            end_time: end_time.into(),
            task: task.into(),
            tag: tag.into(),
        }
    }
}
