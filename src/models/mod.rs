pub mod entry;
pub mod filter;
pub mod history;
pub mod settings;
