use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::minutes_to_hours;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ENTRY COUNTS
    //
    let (count, unpaid, minutes): (i64, i64, i64) = pool.conn.query_row(
        "SELECT COUNT(*),
                COALESCE(SUM(CASE WHEN is_paid = 0 THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(total_minutes), 0)
         FROM time_entry",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;
    println!(
        "{}• Total entries:{} {}{}{} ({} unpaid)",
        CYAN, RESET, GREEN, count, RESET, unpaid
    );
    println!(
        "{}• Total hours:{} {}",
        CYAN,
        RESET,
        minutes_to_hours(minutes)
    );

    //
    // 3) DATE RANGE
    //
    let range: Option<(String, String)> = pool
        .conn
        .query_row(
            "SELECT MIN(date), MAX(date) FROM time_entry HAVING COUNT(*) > 0",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    let placeholder = format!("{GREY}--{RESET}");
    let (first, last) = range.unwrap_or_else(|| (placeholder.clone(), placeholder));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first);
    println!("    to:   {}", last);

    println!();
    Ok(())
}
