use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// A recorded shift, as stored in the `time_entry` table.
///
/// `total_minutes` and `total_pay` are computed once at creation with the
/// rate in force at that moment (`rate_at_entry`), and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeEntry {
    pub id: i64,
    pub sequence_number: i64,
    pub date: NaiveDate,       // TEXT "YYYY-MM-DD"
    pub start_time: NaiveTime, // TEXT "HH:MM"
    pub end_time: NaiveTime,   // TEXT "HH:MM"
    pub rate_at_entry: i64,    // cents per hour
    pub total_minutes: i64,
    pub total_pay: i64,        // cents
    pub is_paid: bool,
    pub is_overnight: bool,
    pub created_at: String,    // ISO8601
}

impl TimeEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_paid { "paid" } else { "unpaid" }
    }
}

/// Values needed to insert a new entry; everything else is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub sequence_number: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub rate_at_entry: i64,
    pub total_minutes: i64,
    pub total_pay: i64,
    pub is_overnight: bool,
    pub created_at: String,
}
