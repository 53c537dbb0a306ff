use chrono::{NaiveDate, NaiveTime};
use shiftpay::config::Config;
use shiftpay::core::report::report_file_name;
use shiftpay::core::{BackupLogic, EntryLogic, ReportLogic};
use shiftpay::db::pool::DbPool;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("time")
}

fn contains(haystack: &[u8], needle: &str) -> bool {
    haystack
        .windows(needle.len())
        .any(|w| w == needle.as_bytes())
}

#[test]
fn test_report_contains_only_unpaid_entries() {
    let mut pool = DbPool::in_memory().unwrap();
    let cfg = Config::default();
    EntryLogic::create_entry(&mut pool, &cfg, d("2025-09-01"), t("09:00"), t("17:00")).unwrap();
    EntryLogic::create_entry(&mut pool, &cfg, d("2025-09-02"), t("22:00"), t("06:00")).unwrap();
    EntryLogic::mark_paid(&mut pool, 1).unwrap();

    let report = ReportLogic::export_unpaid_to_pdf(&mut pool).unwrap();
    assert!(report.bytes.starts_with(b"%PDF"));
    assert_eq!(report.entry_count, 1);
    assert_eq!(report.total_pay, 20000);

    assert!(contains(&report.bytes, "02/09/2025"));
    assert!(contains(&report.bytes, "06:00 (+1)"));
    assert!(!contains(&report.bytes, "01/09/2025"));
    assert!(contains(&report.bytes, "TOTAL:"));
}

#[test]
fn test_report_with_nothing_unpaid_is_still_a_pdf() {
    let mut pool = DbPool::in_memory().unwrap();

    let report = ReportLogic::export_unpaid_to_pdf(&mut pool).unwrap();
    assert!(report.bytes.starts_with(b"%PDF"));
    assert_eq!(report.entry_count, 0);
    assert!(contains(&report.bytes, "Running total"));
    assert!(!contains(&report.bytes, "TOTAL:"));
}

#[test]
fn test_report_does_not_change_paid_status() {
    let mut pool = DbPool::in_memory().unwrap();
    let cfg = Config::default();
    let e = EntryLogic::create_entry(&mut pool, &cfg, d("2025-09-01"), t("09:00"), t("17:00"))
        .unwrap()
        .entry;

    ReportLogic::export_unpaid_to_pdf(&mut pool).unwrap();
    assert!(!EntryLogic::get_entry(&mut pool, e.id).unwrap().is_paid);
}

#[test]
fn test_report_spans_pages() {
    let mut pool = DbPool::in_memory().unwrap();
    let cfg = Config::default();
    for day in 1..=28 {
        for (s, e) in [("06:00", "10:00"), ("12:00", "16:00")] {
            let date = d(&format!("2025-02-{day:02}"));
            EntryLogic::create_entry(&mut pool, &cfg, date, t(s), t(e)).unwrap();
        }
    }

    let report = ReportLogic::export_unpaid_to_pdf(&mut pool).unwrap();
    assert_eq!(report.entry_count, 56);
    assert!(contains(&report.bytes, "Page 2"));
}

#[test]
fn test_report_file_name() {
    assert_eq!(report_file_name(d("2025-09-03")), "unpaid_entries_20250903.pdf");
}

#[test]
fn test_backup_snapshot() {
    let mut pool = DbPool::in_memory().unwrap();
    let cfg = Config::default();
    EntryLogic::create_entry(&mut pool, &cfg, d("2025-09-01"), t("09:00"), t("17:00")).unwrap();

    let json = BackupLogic::to_json(&mut pool).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["entries"].as_array().map(|a| a.len()), Some(1));
    assert_eq!(v["settings"].as_array().map(|a| a.len()), Some(1));
}
