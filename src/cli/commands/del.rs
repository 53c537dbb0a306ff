use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::EntryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        // fail on unknown ids before prompting
        let entry = EntryLogic::get_entry(&mut pool, *id)?;

        let prompt = format!(
            "Delete entry #{} ({} {}-{})? This action is irreversible.",
            entry.sequence_number,
            entry.date_str(),
            entry.start_str(),
            entry.end_str()
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let deleted = EntryLogic::delete_entry(&mut pool, *id)?;
        success(format!(
            "Entry #{} deleted successfully.",
            deleted.sequence_number
        ));
    }

    Ok(())
}
