use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{EntryLogic, SettingsLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::filter::EntryFilter;
use crate::models::history::History;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_paid};
use crate::utils::date::parse_optional_date;
use crate::utils::table::{Column, Table};
use crate::utils::{format_currency, minutes_to_hours};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { unpaid, from, to } = cmd {
        let filter = EntryFilter {
            show_paid: !*unpaid,
            from: parse_optional_date(from.as_deref())?,
            to: parse_optional_date(to.as_deref())?,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let history = EntryLogic::history(&mut pool, &filter)?;
        let symbol = SettingsLogic::get(&mut pool)?.currency_symbol;

        if history.entries.is_empty() {
            info("No entries found.");
            return Ok(());
        }

        print_history(&history, &symbol);
    }

    Ok(())
}

fn print_history(history: &History, symbol: &str) {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::right("#"),
        Column::left("Date"),
        Column::left("Start"),
        Column::left("End"),
        Column::right("Hours"),
        Column::right("Rate"),
        Column::right("Pay"),
        Column::left("Status"),
    ]);

    for e in &history.entries {
        table.add_row(vec![
            e.id.to_string(),
            e.sequence_number.to_string(),
            e.date_str(),
            e.start_str(),
            if e.is_overnight {
                format!("{} (+1)", e.end_str())
            } else {
                e.end_str()
            },
            minutes_to_hours(e.total_minutes),
            format_currency(e.rate_at_entry, symbol),
            format_currency(e.total_pay, symbol),
            e.status_label().to_string(),
        ]);
    }

    header("Time entries");
    // colour the status column after layout, so widths stay correct
    for line in table.render().lines() {
        if let Some(stripped) = line.strip_suffix("unpaid") {
            println!("{}{}unpaid{}", stripped, color_for_paid(false), RESET);
        } else if let Some(stripped) = line.strip_suffix("paid") {
            println!("{}{}paid{}", stripped, color_for_paid(true), RESET);
        } else {
            println!("{}", line);
        }
    }

    let s = &history.stats;
    println!();
    println!(
        "Total:  {}h  {}",
        minutes_to_hours(s.total_minutes),
        format_currency(s.total_pay, symbol)
    );
    println!(
        "Unpaid: {}h  {}",
        minutes_to_hours(s.unpaid_minutes),
        format_currency(s.unpaid_pay, symbol)
    );
}
