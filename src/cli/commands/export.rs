use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        ReportLogic::export_unpaid_to_file(&mut pool, file, *force)?;
    }
    Ok(())
}
