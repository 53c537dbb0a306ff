// src/export/model.rs

use crate::models::entry::TimeEntry;
use crate::models::settings::Settings;
use crate::utils::date::format_report_date;
use crate::utils::formatting::{cents_to_decimal, format_currency};
use crate::utils::minutes_to_hours;
use serde::Serialize;

/// Header of the unpaid-entries report table.
pub(crate) fn report_headers() -> Vec<&'static str> {
    vec![
        "#",
        "Date",
        "Start",
        "End",
        "Hours",
        "Rate",
        "Pay",
        "Running total",
    ]
}

/// Table rows for the report plus the TOTAL footer row.
pub(crate) fn report_rows(entries: &[TimeEntry], symbol: &str) -> (Vec<Vec<String>>, Vec<String>) {
    let mut running = 0i64;
    let mut minutes = 0i64;

    let rows = entries
        .iter()
        .map(|e| {
            running += e.total_pay;
            minutes += e.total_minutes;
            vec![
                e.sequence_number.to_string(),
                format_report_date(&e.date),
                e.start_str(),
                if e.is_overnight {
                    format!("{} (+1)", e.end_str())
                } else {
                    e.end_str()
                },
                minutes_to_hours(e.total_minutes),
                format_currency(e.rate_at_entry, symbol),
                format_currency(e.total_pay, symbol),
                format_currency(running, symbol),
            ]
        })
        .collect();

    let footer = vec![
        String::new(),
        String::new(),
        String::new(),
        "TOTAL:".to_string(),
        minutes_to_hours(minutes),
        String::new(),
        format_currency(running, symbol),
        String::new(),
    ];

    (rows, footer)
}

/// Flat entry representation used by the JSON backup.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub sequence_number: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub rate_at_entry: String,
    pub total_hours: String,
    pub total_pay: String,
    pub is_paid: bool,
    pub is_overnight: bool,
    pub created_at: String,
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        Self {
            sequence_number: e.sequence_number,
            date: e.date_str(),
            start_time: e.start_str(),
            end_time: e.end_str(),
            rate_at_entry: cents_to_decimal(e.rate_at_entry),
            total_hours: minutes_to_hours(e.total_minutes),
            total_pay: cents_to_decimal(e.total_pay),
            is_paid: e.is_paid,
            is_overnight: e.is_overnight,
            created_at: e.created_at.clone(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct SettingsExport {
    pub current_rate: String,
    pub currency_symbol: String,
    pub created_at: String,
}

impl From<&Settings> for SettingsExport {
    fn from(s: &Settings) -> Self {
        Self {
            current_rate: cents_to_decimal(s.hourly_rate),
            currency_symbol: s.currency_symbol.clone(),
            created_at: s.created_at.clone(),
        }
    }
}

/// Full data snapshot written by `backup`.
#[derive(Serialize, Clone, Debug)]
pub struct BackupSnapshot {
    pub settings: Vec<SettingsExport>,
    pub entries: Vec<EntryExport>,
}
