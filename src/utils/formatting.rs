//! Formatting utilities used for CLI and export outputs.

use crate::errors::{AppError, AppResult};

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// 123456 → "1234.56"
pub fn cents_to_decimal(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let c = cents.abs();
    format!("{}{}.{:02}", sign, c / 100, c % 100)
}

/// 123456, "$" → "$1,234.56"
pub fn format_currency(cents: i64, symbol: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let c = cents.abs();
    let units = (c / 100).to_string();

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}{}.{:02}", sign, symbol, grouped, c % 100)
}

/// Parse a decimal amount ("25", "25.5", "25.50") into cents.
/// More than two decimals, signs and garbage are rejected.
pub fn parse_amount(input: &str) -> AppResult<i64> {
    let s = input.trim();
    let invalid = || AppError::InvalidAmount(input.to_string());

    let (units, frac) = match s.split_once('.') {
        Some((u, f)) => (u, f),
        None => (s, ""),
    };

    if units.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if frac.len() > 2
        || !units.chars().all(|c| c.is_ascii_digit())
        || !frac.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let units: i64 = if units.is_empty() {
        0
    } else {
        units.parse().map_err(|_| invalid())?
    };
    let frac: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => frac.parse().map_err(|_| invalid())?,
    };

    units
        .checked_mul(100)
        .and_then(|v| v.checked_add(frac))
        .ok_or_else(invalid)
}
