use crate::errors::AppResult;
use crate::models::settings::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_RATE_CENTS, Settings};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

fn read(conn: &Connection) -> AppResult<Option<Settings>> {
    Ok(conn
        .query_row(
            "SELECT current_rate, currency_symbol, created_at FROM settings WHERE id = 1",
            [],
            |row| {
                Ok(Settings {
                    hourly_rate: row.get(0)?,
                    currency_symbol: row.get(1)?,
                    created_at: row.get(2)?,
                })
            },
        )
        .optional()?)
}

/// Load the settings row, inserting the defaults the first time.
pub fn load_or_create(conn: &Connection) -> AppResult<Settings> {
    if let Some(s) = read(conn)? {
        return Ok(s);
    }

    conn.execute(
        "INSERT OR IGNORE INTO settings (id, current_rate, currency_symbol, created_at)
         VALUES (1, ?1, ?2, ?3)",
        params![
            DEFAULT_RATE_CENTS,
            DEFAULT_CURRENCY_SYMBOL,
            Local::now().to_rfc3339()
        ],
    )?;

    // Read back: handles a concurrent insert between the two statements
    Ok(read(conn)?.unwrap_or_else(|| Settings {
        hourly_rate: DEFAULT_RATE_CENTS,
        currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        created_at: Local::now().to_rfc3339(),
    }))
}

pub fn save(conn: &Connection, hourly_rate: i64, currency_symbol: &str) -> AppResult<Settings> {
    load_or_create(conn)?;

    conn.execute(
        "UPDATE settings SET current_rate = ?1, currency_symbol = ?2 WHERE id = 1",
        params![hourly_rate, currency_symbol],
    )?;

    load_or_create(conn)
}
