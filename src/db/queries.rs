use crate::errors::{AppError, AppResult};
use crate::models::entry::{NewEntry, TimeEntry};
use crate::models::filter::EntryFilter;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, ToSql, params};

const ENTRY_COLUMNS: &str = "id, sequence_number, date, start_time, end_time, rate_at_entry,
     total_minutes, total_pay, is_paid, is_overnight, created_at";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<TimeEntry> {
    let date_str: String = row.get("date")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(2, AppError::InvalidDate(date_str.clone())))?;

    let start_time = NaiveTime::parse_from_str(&start_str, "%H:%M")
        .map_err(|_| conversion_error(3, AppError::InvalidTime(start_str.clone())))?;

    let end_time = NaiveTime::parse_from_str(&end_str, "%H:%M")
        .map_err(|_| conversion_error(4, AppError::InvalidTime(end_str.clone())))?;

    Ok(TimeEntry {
        id: row.get("id")?,
        sequence_number: row.get("sequence_number")?,
        date,
        start_time,
        end_time,
        rate_at_entry: row.get("rate_at_entry")?,
        total_minutes: row.get("total_minutes")?,
        total_pay: row.get("total_pay")?,
        is_paid: row.get::<_, i32>("is_paid")? == 1,
        is_overnight: row.get::<_, i32>("is_overnight")? == 1,
        created_at: row.get("created_at")?,
    })
}

/// Next user-facing sequence number (1 on an empty table).
pub fn next_sequence(conn: &Connection) -> AppResult<i64> {
    let last: Option<i64> = conn.query_row(
        "SELECT MAX(sequence_number) FROM time_entry",
        [],
        |row| row.get(0),
    )?;
    Ok(last.map_or(1, |n| n + 1))
}

/// Insert a new entry and return its row id.
pub fn insert_entry(conn: &Connection, e: &NewEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO time_entry (sequence_number, date, start_time, end_time, rate_at_entry,
                                 total_minutes, total_pay, is_paid, is_overnight, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, ?8, ?9)",
        params![
            e.sequence_number,
            e.date.format("%Y-%m-%d").to_string(),
            e.start_time.format("%H:%M").to_string(),
            e.end_time.format("%H:%M").to_string(),
            e.rate_at_entry,
            e.total_minutes,
            e.total_pay,
            if e.is_overnight { 1 } else { 0 },
            e.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Option<TimeEntry>> {
    let sql = format!("SELECT {ENTRY_COLUMNS} FROM time_entry WHERE id = ?1");
    Ok(conn.query_row(&sql, [id], map_row).optional()?)
}

/// Build the WHERE clause shared by listing and bulk payment.
fn filter_clause(filter: &EntryFilter) -> (String, Vec<String>) {
    let mut conds: Vec<&str> = Vec::new();
    let mut args: Vec<String> = Vec::new();

    if !filter.show_paid {
        conds.push("is_paid = 0");
    }
    if let Some(from) = filter.from {
        args.push(from.format("%Y-%m-%d").to_string());
        conds.push("date >= ?");
    }
    if let Some(to) = filter.to {
        args.push(to.format("%Y-%m-%d").to_string());
        conds.push("date <= ?");
    }

    if conds.is_empty() {
        (String::new(), args)
    } else {
        (format!("WHERE {}", conds.join(" AND ")), args)
    }
}

/// Entries matching `filter`, ordered by date then start time.
pub fn load_entries(conn: &Connection, filter: &EntryFilter) -> AppResult<Vec<TimeEntry>> {
    let (clause, args) = filter_clause(filter);
    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM time_entry {clause}
         ORDER BY date ASC, start_time ASC, sequence_number ASC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn ToSql> = args.iter().map(|s| s as &dyn ToSql).collect();
    let rows = stmt.query_map(rusqlite::params_from_iter(params), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_unpaid(conn: &Connection) -> AppResult<Vec<TimeEntry>> {
    load_entries(conn, &EntryFilter::unpaid())
}

pub fn load_all(conn: &Connection) -> AppResult<Vec<TimeEntry>> {
    load_entries(conn, &EntryFilter::default())
}

/// Set the paid flag; returns false when no row has that id.
pub fn set_paid(conn: &Connection, id: i64, paid: bool) -> AppResult<bool> {
    let n = conn.execute(
        "UPDATE time_entry SET is_paid = ?1 WHERE id = ?2",
        params![if paid { 1 } else { 0 }, id],
    )?;
    Ok(n > 0)
}

/// Mark the given ids as paid. Caller is expected to run this inside a transaction.
pub fn mark_ids_paid(conn: &Connection, ids: &[i64]) -> AppResult<usize> {
    let mut stmt = conn.prepare_cached("UPDATE time_entry SET is_paid = 1 WHERE id = ?1")?;
    let mut n = 0;
    for id in ids {
        n += stmt.execute([id])?;
    }
    Ok(n)
}

/// Delete an entry; returns false when no row has that id.
pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM time_entry WHERE id = ?1", [id])?;
    Ok(n > 0)
}
