use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{EntryLogic, SettingsLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::parse_optional_time;
use crate::utils::{format_currency, minutes_to_hours};

/// Record a new shift.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, start, end } = cmd {
        //
        // 1. Resolve inputs (smart defaults: today, configured shift)
        //
        let d = match date {
            Some(s) => date::parse_date_arg(s)?,
            None => date::today(),
        };

        let (default_start, default_end) = cfg.default_shift()?;
        let start = parse_optional_time(start.as_ref())?.unwrap_or(default_start);
        let end = parse_optional_time(end.as_ref())?.unwrap_or(default_end);

        //
        // 2. Store
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let created = EntryLogic::create_entry(&mut pool, cfg, d, start, end)?;
        let symbol = SettingsLogic::get(&mut pool)?.currency_symbol;

        //
        // 3. Report
        //
        for w in &created.warnings {
            warning(format!("Warning: {w}"));
        }

        let e = &created.entry;
        success(format!(
            "Time entry #{} saved (id {}){}! Total: {}h, Pay: {}",
            e.sequence_number,
            e.id,
            if e.is_overnight { " [overnight]" } else { "" },
            minutes_to_hours(e.total_minutes),
            format_currency(e.total_pay, &symbol)
        ));
    }

    Ok(())
}
