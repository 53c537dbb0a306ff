use super::entry::TimeEntry;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryStats {
    pub total_minutes: i64,
    pub total_pay: i64,
    pub unpaid_minutes: i64,
    pub unpaid_pay: i64,
}

impl HistoryStats {
    pub fn from_entries(entries: &[TimeEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut acc, e| {
            acc.total_minutes += e.total_minutes;
            acc.total_pay += e.total_pay;
            if !e.is_paid {
                acc.unpaid_minutes += e.total_minutes;
                acc.unpaid_pay += e.total_pay;
            }
            acc
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct History {
    pub entries: Vec<TimeEntry>,
    pub stats: HistoryStats,
}

/// Result of a bulk "Pay All".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PayAllOutcome {
    pub count: usize,
    pub total_pay: i64,
}
