//! Business logic. Every operation takes an open `DbPool`, so the CLI and
//! the HTTP layer share the same code paths.

pub mod backup;
pub mod calculator;
pub mod entry;
pub mod log;
pub mod report;
pub mod settings;

pub use backup::BackupLogic;
pub use entry::{CreatedEntry, EntryLogic};
pub use log::LogLogic;
pub use report::{ReportLogic, UnpaidReport};
pub use settings::SettingsLogic;
