//! Time utilities: parsing HH:MM, formatting minutes and hours.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

/// Parse `HH:MM` (or `HH:MM:SS`, as sent by browser time inputs).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

pub fn parse_time_arg(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    input.map(|s| parse_time_arg(s)).transpose()
}

pub fn format_time(t: &NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// 510 → "8.50"
pub fn minutes_to_hours(mins: i64) -> String {
    let m = mins.abs();
    let sign = if mins < 0 { "-" } else { "" };
    // 59 min rounds to .98 at most, so no carry into the hour
    let hundredths = (m % 60 * 100 + 30) / 60;
    format!("{}{}.{:02}", sign, m / 60, hundredths)
}
