// src/export/mod.rs

pub(crate) mod fs_utils;
pub mod model;
pub mod pdf;

pub use model::{BackupSnapshot, EntryExport, SettingsExport};
pub use pdf::PdfManager;

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for file exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
