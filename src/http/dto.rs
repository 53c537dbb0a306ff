//! Request and response bodies of the HTTP API.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::models::history::{HistoryStats, PayAllOutcome};
use crate::models::settings::Settings;
use crate::utils::format_currency;
use crate::utils::formatting::{cents_to_decimal, parse_amount};
use crate::utils::minutes_to_hours;

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: i64,
    pub sequence_number: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub is_overnight: bool,
    pub is_paid: bool,
    pub total_minutes: i64,
    pub total_hours: String,
    pub rate_at_entry: String,
    pub total_pay: String,
    pub total_pay_display: String,
}

impl EntryResponse {
    pub fn new(e: &TimeEntry, symbol: &str) -> Self {
        Self {
            id: e.id,
            sequence_number: e.sequence_number,
            date: e.date_str(),
            start_time: e.start_str(),
            end_time: e.end_str(),
            is_overnight: e.is_overnight,
            is_paid: e.is_paid,
            total_minutes: e.total_minutes,
            total_hours: minutes_to_hours(e.total_minutes),
            rate_at_entry: cents_to_decimal(e.rate_at_entry),
            total_pay: cents_to_decimal(e.total_pay),
            total_pay_display: format_currency(e.total_pay, symbol),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateEntryRequest {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateEntryResponse {
    pub entry: EntryResponse,
    pub warnings: Vec<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct EntryDefaultsResponse {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub show_paid: Option<bool>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_hours: String,
    pub total_pay: String,
    pub unpaid_hours: String,
    pub unpaid_pay: String,
}

impl StatsResponse {
    pub fn new(s: &HistoryStats) -> Self {
        Self {
            total_hours: minutes_to_hours(s.total_minutes),
            total_pay: cents_to_decimal(s.total_pay),
            unpaid_hours: minutes_to_hours(s.unpaid_minutes),
            unpaid_pay: cents_to_decimal(s.unpaid_pay),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<EntryResponse>,
    pub stats: StatsResponse,
    pub show_paid: bool,
}

#[derive(Debug, Serialize)]
pub struct PayAllResponse {
    pub count: usize,
    pub total_pay: String,
    pub message: String,
}

impl PayAllResponse {
    pub fn new(o: &PayAllOutcome, symbol: &str) -> Self {
        let message = if o.count == 0 {
            "No unpaid entries found to mark as paid.".to_string()
        } else {
            format!(
                "Marked {} entries as paid. Total: {}",
                o.count,
                format_currency(o.total_pay, symbol)
            )
        };
        Self {
            count: o.count,
            total_pay: cents_to_decimal(o.total_pay),
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub hourly_rate: String,
    pub currency_symbol: String,
}

impl From<&Settings> for SettingsResponse {
    fn from(s: &Settings) -> Self {
        Self {
            hourly_rate: cents_to_decimal(s.hourly_rate),
            currency_symbol: s.currency_symbol.clone(),
        }
    }
}

/// Amounts may arrive as JSON numbers (`25.5`) or strings (`"25.50"`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    pub fn to_cents(&self) -> AppResult<i64> {
        match self {
            AmountInput::Text(s) => parse_amount(s),
            AmountInput::Number(n) => {
                let cents = (n * 100.0).round();
                if !n.is_finite() || *n < 0.0 || (cents / 100.0 - n).abs() > 1e-6 {
                    return Err(AppError::InvalidAmount(n.to_string()));
                }
                Ok(cents as i64)
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsRequest {
    pub hourly_rate: Option<AmountInput>,
    pub currency_symbol: Option<String>,
}
