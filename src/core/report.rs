use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::{queries, settings};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_writable, write_file};
use crate::export::model::{report_headers, report_rows};
use crate::export::{PdfManager, notify_export_success};
use crate::ui::messages::{info, warning};
use crate::utils::format_currency;
use crate::utils::path::expand_tilde;
use chrono::{Local, NaiveDate};

pub const REPORT_TITLE: &str = "Unpaid Time Entries Report";

/// A rendered unpaid-entries report.
#[derive(Debug, Clone)]
pub struct UnpaidReport {
    pub bytes: Vec<u8>,
    pub entry_count: usize,
    pub total_pay: i64,
    pub file_name: String,
}

/// Download name for a report generated on `day`.
pub fn report_file_name(day: NaiveDate) -> String {
    format!("unpaid_entries_{}.pdf", day.format("%Y%m%d"))
}

pub struct ReportLogic;

impl ReportLogic {
    /// Render every entry that is unpaid right now into a PDF.
    ///
    /// With nothing unpaid the document still has one page with the table header.
    pub fn export_unpaid_to_pdf(pool: &mut DbPool) -> AppResult<UnpaidReport> {
        let entries = queries::load_unpaid(&pool.conn)?;
        let symbol = settings::load_or_create(&pool.conn)?.currency_symbol;

        let (rows, footer) = report_rows(&entries, &symbol);
        let total_pay: i64 = entries.iter().map(|e| e.total_pay).sum();

        let now = Local::now();
        let subtitle = format!(
            "Generated {} | {} unpaid entries | total {}",
            now.format("%d/%m/%Y %H:%M"),
            entries.len(),
            format_currency(total_pay, &symbol)
        );

        let mut pdf = PdfManager::new();
        pdf.write_table(REPORT_TITLE, &subtitle, &report_headers(), &rows, Some(&footer));

        tracing::info!(
            entries = entries.len(),
            pages = pdf.page_count(),
            "unpaid report rendered"
        );

        ttlog(
            &pool.conn,
            "export",
            "pdf",
            &format!("{} unpaid entries exported", entries.len()),
        )?;

        Ok(UnpaidReport {
            bytes: pdf.finish(),
            entry_count: entries.len(),
            total_pay,
            file_name: report_file_name(now.date_naive()),
        })
    }

    /// Write the unpaid report to an absolute file path.
    pub fn export_unpaid_to_file(pool: &mut DbPool, file: &str, force: bool) -> AppResult<UnpaidReport> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;
        info(format!("Exporting to PDF: {}", path.display()));

        let report = Self::export_unpaid_to_pdf(pool)?;
        if report.entry_count == 0 {
            warning("No unpaid entries: the report only contains the table header.");
        }

        write_file(&path, &report.bytes)?;
        notify_export_success("PDF", &path);
        Ok(report)
    }
}
