use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::settings;
use crate::errors::{AppError, AppResult};
use crate::models::settings::{MAX_RATE_CENTS, MIN_RATE_CENTS, Settings};
use crate::utils::format_currency;
use crate::utils::formatting::cents_to_decimal;

const MAX_SYMBOL_CHARS: usize = 5;

pub struct SettingsLogic;

impl SettingsLogic {
    pub fn get(pool: &mut DbPool) -> AppResult<Settings> {
        settings::load_or_create(&pool.conn)
    }

    /// Update the hourly rate and, optionally, the currency symbol.
    /// Existing entries keep the rate they were created with.
    pub fn update(
        pool: &mut DbPool,
        hourly_rate: Option<i64>,
        currency_symbol: Option<&str>,
    ) -> AppResult<Settings> {
        let current = Self::get(pool)?;

        let rate = hourly_rate.unwrap_or(current.hourly_rate);
        if !(MIN_RATE_CENTS..=MAX_RATE_CENTS).contains(&rate) {
            return Err(AppError::Validation(format!(
                "Hourly rate must be between {} and {}.",
                cents_to_decimal(MIN_RATE_CENTS),
                cents_to_decimal(MAX_RATE_CENTS)
            )));
        }

        let symbol = currency_symbol
            .map(str::trim)
            .unwrap_or(current.currency_symbol.as_str())
            .to_string();
        if symbol.is_empty() || symbol.chars().count() > MAX_SYMBOL_CHARS {
            return Err(AppError::Validation(format!(
                "Currency symbol must be 1 to {} characters.",
                MAX_SYMBOL_CHARS
            )));
        }

        let updated = pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            let s = settings::save(&tx, rate, &symbol)?;
            ttlog(
                &tx,
                "settings",
                "hourly_rate",
                &format!(
                    "{} -> {}",
                    format_currency(current.hourly_rate, &current.currency_symbol),
                    format_currency(s.hourly_rate, &s.currency_symbol)
                ),
            )?;
            tx.commit()?;
            Ok(s)
        })?;

        tracing::info!(rate = updated.hourly_rate, symbol = %updated.currency_symbol, "settings updated");
        Ok(updated)
    }
}
