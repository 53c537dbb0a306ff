use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{EntryLogic, SettingsLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_optional_date;
use crate::utils::format_currency;

/// `paid`, `toggle` and `pay-all`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Paid { id } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let e = EntryLogic::mark_paid(&mut pool, *id)?;
            success(format!("Entry #{} marked as paid.", e.sequence_number));
        }
        Commands::Toggle { id } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let e = EntryLogic::toggle_paid(&mut pool, *id)?;
            success(format!(
                "Entry #{} marked as {}.",
                e.sequence_number,
                e.status_label()
            ));
        }
        Commands::PayAll { from, to } => {
            let from = parse_optional_date(from.as_deref())?;
            let to = parse_optional_date(to.as_deref())?;

            let mut pool = DbPool::new(&cfg.database)?;
            let outcome = EntryLogic::mark_all_unpaid_as_paid(&mut pool, from, to)?;

            if outcome.count == 0 {
                warning("No unpaid entries found to mark as paid.");
            } else {
                let symbol = SettingsLogic::get(&mut pool)?.currency_symbol;
                success(format!(
                    "Marked {} entries as paid. Total: {}",
                    outcome.count,
                    format_currency(outcome.total_pay, &symbol)
                ));
            }
        }
        _ => {}
    }

    Ok(())
}
