use serde::Serialize;

pub const DEFAULT_RATE_CENTS: i64 = 2500;
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Smallest and largest accepted hourly rate, in cents.
pub const MIN_RATE_CENTS: i64 = 1;
pub const MAX_RATE_CENTS: i64 = 99_999;

/// Singleton row of the `settings` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub hourly_rate: i64, // cents
    pub currency_symbol: String,
    pub created_at: String,
}
