use crate::config::Config;
use crate::core::calculator::{Shift, compute_amount};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::{queries, settings};
use crate::errors::{AppError, AppResult};
use crate::models::entry::{NewEntry, TimeEntry};
use crate::models::filter::EntryFilter;
use crate::models::history::{History, HistoryStats, PayAllOutcome};
use crate::utils::{format_currency, minutes_to_hours};
use chrono::{Local, NaiveDate, NaiveTime};

/// A freshly stored entry plus any non-fatal remarks about it.
#[derive(Debug, Clone)]
pub struct CreatedEntry {
    pub entry: TimeEntry,
    pub warnings: Vec<String>,
}

/// High-level business logic for time entries.
pub struct EntryLogic;

impl EntryLogic {
    /// Validate, price and store a new shift.
    ///
    /// The pay is computed with the hourly rate in force right now and frozen
    /// on the entry; later rate changes leave it untouched.
    pub fn create_entry(
        pool: &mut DbPool,
        cfg: &Config,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> AppResult<CreatedEntry> {
        let shift = Shift::new(start, end)?;
        let total_minutes = shift.duration_minutes();

        let entry = pool.with_conn(|conn| {
            let tx = conn.transaction()?;

            let rate = settings::load_or_create(&tx)?.hourly_rate;
            let new_entry = NewEntry {
                sequence_number: queries::next_sequence(&tx)?,
                date,
                start_time: shift.start,
                end_time: shift.end,
                rate_at_entry: rate,
                total_minutes,
                total_pay: compute_amount(total_minutes, rate),
                is_overnight: shift.is_overnight(),
                created_at: Local::now().to_rfc3339(),
            };

            let id = queries::insert_entry(&tx, &new_entry)?;
            ttlog(
                &tx,
                "add",
                &format!("#{}", new_entry.sequence_number),
                &format!(
                    "{} {}-{} ({}h)",
                    date,
                    shift.start.format("%H:%M"),
                    shift.end.format("%H:%M"),
                    minutes_to_hours(total_minutes)
                ),
            )?;

            let entry = queries::load_entry(&tx, id)?.ok_or(AppError::NotFound(id))?;
            tx.commit()?;
            Ok(entry)
        })?;

        tracing::info!(
            id = entry.id,
            seq = entry.sequence_number,
            minutes = entry.total_minutes,
            overnight = entry.is_overnight,
            "time entry created"
        );

        let mut warnings = Vec::new();
        if entry.total_minutes > cfg.max_shift_hours * 60 {
            warnings.push(format!(
                "Shift duration exceeds {} hours.",
                cfg.max_shift_hours
            ));
        }

        Ok(CreatedEntry { entry, warnings })
    }

    pub fn get_entry(pool: &mut DbPool, id: i64) -> AppResult<TimeEntry> {
        queries::load_entry(&pool.conn, id)?.ok_or(AppError::NotFound(id))
    }

    /// Mark a single entry as paid. Already-paid entries are left as they are.
    pub fn mark_paid(pool: &mut DbPool, id: i64) -> AppResult<TimeEntry> {
        let entry = Self::get_entry(pool, id)?;
        if entry.is_paid {
            return Ok(entry);
        }

        Self::set_paid(pool, entry, true)
    }

    /// Flip the paid flag of an entry and return it in its new state.
    pub fn toggle_paid(pool: &mut DbPool, id: i64) -> AppResult<TimeEntry> {
        let entry = Self::get_entry(pool, id)?;
        let paid = !entry.is_paid;
        Self::set_paid(pool, entry, paid)
    }

    fn set_paid(pool: &mut DbPool, mut entry: TimeEntry, paid: bool) -> AppResult<TimeEntry> {
        pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            if !queries::set_paid(&tx, entry.id, paid)? {
                return Err(AppError::NotFound(entry.id));
            }
            entry.is_paid = paid;
            ttlog(
                &tx,
                "paid",
                &format!("#{}", entry.sequence_number),
                &format!("marked as {}", entry.status_label()),
            )?;
            tx.commit()?;
            Ok(())
        })?;

        tracing::info!(id = entry.id, paid, "paid status changed");
        Ok(entry)
    }

    /// "Pay All": mark every unpaid entry inside the optional date range as paid.
    ///
    /// Running it twice in a row is harmless: the second run finds nothing to pay.
    pub fn mark_all_unpaid_as_paid(
        pool: &mut DbPool,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> AppResult<PayAllOutcome> {
        let filter = EntryFilter {
            show_paid: false,
            from,
            to,
        };

        let outcome = pool.with_conn(|conn| {
            let tx = conn.transaction()?;

            let unpaid = queries::load_entries(&tx, &filter)?;
            if unpaid.is_empty() {
                return Ok(PayAllOutcome::default());
            }

            let ids: Vec<i64> = unpaid.iter().map(|e| e.id).collect();
            let count = queries::mark_ids_paid(&tx, &ids)?;
            let total_pay = unpaid.iter().map(|e| e.total_pay).sum();

            let symbol = settings::load_or_create(&tx)?.currency_symbol;
            ttlog(
                &tx,
                "pay_all",
                &range_label(from, to),
                &format!(
                    "marked {} entries as paid, total {}",
                    count,
                    format_currency(total_pay, &symbol)
                ),
            )?;

            tx.commit()?;
            Ok(PayAllOutcome { count, total_pay })
        })?;

        tracing::info!(
            count = outcome.count,
            total = outcome.total_pay,
            "pay all completed"
        );
        Ok(outcome)
    }

    /// Delete an entry and return what was removed.
    pub fn delete_entry(pool: &mut DbPool, id: i64) -> AppResult<TimeEntry> {
        let entry = Self::get_entry(pool, id)?;

        pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            if !queries::delete_entry(&tx, id)? {
                return Err(AppError::NotFound(id));
            }
            ttlog(
                &tx,
                "del",
                &format!("#{}", entry.sequence_number),
                &format!(
                    "{} {}-{} deleted",
                    entry.date_str(),
                    entry.start_str(),
                    entry.end_str()
                ),
            )?;
            tx.commit()?;
            Ok(())
        })?;

        tracing::info!(id, seq = entry.sequence_number, "time entry deleted");
        Ok(entry)
    }

    /// Entries matching the filter, with totals over the listed entries.
    pub fn history(pool: &mut DbPool, filter: &EntryFilter) -> AppResult<History> {
        if let (Some(from), Some(to)) = (filter.from, filter.to)
            && from > to
        {
            return Err(AppError::Validation(format!(
                "Start date {} is after end date {}.",
                from, to
            )));
        }

        let entries = queries::load_entries(&pool.conn, filter)?;
        let stats = HistoryStats::from_entries(&entries);
        Ok(History { entries, stats })
    }
}

fn range_label(from: Option<NaiveDate>, to: Option<NaiveDate>) -> String {
    match (from, to) {
        (None, None) => "all".to_string(),
        (Some(f), None) => format!("{f}:"),
        (None, Some(t)) => format!(":{t}"),
        (Some(f), Some(t)) => format!("{f}:{t}"),
    }
}
