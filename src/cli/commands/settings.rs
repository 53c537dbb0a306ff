use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SettingsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::format_currency;
use crate::utils::formatting::parse_amount;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings { rate, currency } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let s = if rate.is_none() && currency.is_none() {
            SettingsLogic::get(&mut pool)?
        } else {
            let cents = rate.as_deref().map(parse_amount).transpose()?;
            let s = SettingsLogic::update(&mut pool, cents, currency.as_deref())?;
            success("Settings updated successfully!");
            s
        };

        println!(
            "Hourly rate: {}",
            format_currency(s.hourly_rate, &s.currency_symbol)
        );
        println!("Currency:    {}", s.currency_symbol);
    }

    Ok(())
}
