//! Shift duration, including shifts that run past midnight.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Entries store `HH:MM`, so seconds never take part in a shift.
fn whole_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

/// A validated start/end pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Shift {
    /// Times are truncated to the minute, then `start == end` is rejected.
    pub fn new(start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        let (start, end) = (whole_minute(start), whole_minute(end));
        if start == end {
            return Err(AppError::Validation(format!(
                "End time must differ from start time ({}).",
                start.format("%H:%M")
            )));
        }
        Ok(Self { start, end })
    }

    /// End earlier than start: the shift ends on the following day.
    pub fn is_overnight(&self) -> bool {
        self.end < self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        let raw = (self.end - self.start).num_minutes();
        if self.is_overnight() {
            raw + MINUTES_PER_DAY
        } else {
            raw
        }
    }
}
