use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migrations record themselves there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ordered list of schema migrations: (version, description, sql).
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250301_0001_create_time_entry",
        "Created time_entry table",
        r#"
        CREATE TABLE IF NOT EXISTS time_entry (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            sequence_number INTEGER NOT NULL,
            date            TEXT NOT NULL,
            start_time      TEXT NOT NULL,
            end_time        TEXT NOT NULL,
            rate_at_entry   INTEGER NOT NULL,
            total_minutes   INTEGER NOT NULL CHECK(total_minutes >= 0),
            total_pay       INTEGER NOT NULL,
            is_paid         INTEGER NOT NULL DEFAULT 0 CHECK(is_paid IN (0, 1)),
            is_overnight    INTEGER NOT NULL DEFAULT 0 CHECK(is_overnight IN (0, 1)),
            created_at      TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_time_entry_date_start ON time_entry(date, start_time);
        "#,
    ),
    (
        "20250301_0002_create_settings",
        "Created settings table",
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            id              INTEGER PRIMARY KEY CHECK(id = 1),
            current_rate    INTEGER NOT NULL DEFAULT 2500,
            currency_symbol TEXT NOT NULL DEFAULT '$',
            created_at      TEXT NOT NULL
        );
        "#,
    ),
    (
        "20250412_0003_index_time_entry_paid",
        "Added is_paid index to time_entry",
        r#"
        CREATE INDEX IF NOT EXISTS idx_time_entry_paid ON time_entry(is_paid, date);
        "#,
    ),
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Apply one migration and mark it in the log, atomically.
fn apply(conn: &Connection, version: &str, description: &str, sql: &str) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        rusqlite::params![chrono::Local::now().to_rfc3339(), version, description],
    )?;

    tx.commit()
}

/// Public entry point: run all pending migrations.
///
/// Returns how many migrations were applied. Invoked by `db::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, description, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        apply(conn, version, description, sql)?;
        tracing::debug!(version, "migration applied");
        applied += 1;
    }

    Ok(applied)
}

/// Report pending migrations to the terminal (used by `db --migrate`).
pub fn run_pending_migrations_verbose(conn: &Connection) -> Result<()> {
    let n = run_pending_migrations(conn)?;
    if n == 0 {
        success("Database schema is up to date.");
    } else {
        success(format!("Applied {} migration(s).", n));
    }
    Ok(())
}
