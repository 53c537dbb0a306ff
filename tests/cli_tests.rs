use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, setup_test_db, sp, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    sp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_add_reports_hours_and_pay() {
    let db_path = setup_test_db("cli_add");
    sp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sp().args([
        "--db",
        &db_path,
        "add",
        "2025-09-01",
        "--start",
        "09:00",
        "--end",
        "17:30",
    ])
    .assert()
    .success()
    .stdout(contains("Time entry #1 saved"))
    .stdout(contains("Total: 8.50h"))
    .stdout(contains("Pay: $212.50"));
}

#[test]
fn test_add_overnight_shift() {
    let db_path = setup_test_db("cli_overnight");
    sp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sp().args([
        "--db",
        &db_path,
        "add",
        "2025-09-03",
        "--start",
        "22:00",
        "--end",
        "06:00",
    ])
    .assert()
    .success()
    .stdout(contains("[overnight]"))
    .stdout(contains("Total: 8.00h"));
}

#[test]
fn test_add_rejects_equal_start_and_end() {
    let db_path = setup_test_db("cli_equal_times");
    sp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sp().args([
        "--db",
        &db_path,
        "add",
        "2025-09-01",
        "--start",
        "09:00",
        "--end",
        "09:00",
    ])
    .assert()
    .failure()
    .stderr(contains("End time must differ from start time"));
}

#[test]
fn test_add_rejects_bad_time() {
    let db_path = setup_test_db("cli_bad_time");
    sp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sp().args(["--db", &db_path, "add", "2025-09-01", "--start", "25:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_list_shows_entries_and_totals() {
    let db_path = setup_test_db("cli_list");
    init_db_with_data(&db_path);

    sp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-02"))
        .stdout(contains("06:00 (+1)"))
        .stdout(contains("Total:  24.50h  $612.50"));
}

#[test]
fn test_list_unpaid_hides_paid_entries() {
    let db_path = setup_test_db("cli_list_unpaid");
    init_db_with_data(&db_path);

    sp().args(["--db", &db_path, "paid", "1"])
        .assert()
        .success()
        .stdout(contains("Entry #1 marked as paid"));

    sp().args(["--db", &db_path, "list", "--unpaid"])
        .assert()
        .success()
        .stdout(contains("2025-09-01").not())
        .stdout(contains("2025-09-02"));
}

#[test]
fn test_list_date_range() {
    let db_path = setup_test_db("cli_list_range");
    init_db_with_data(&db_path);

    sp().args([
        "--db",
        &db_path,
        "list",
        "--from",
        "2025-09-02",
        "--to",
        "2025-09-02",
    ])
    .assert()
    .success()
    .stdout(contains("2025-09-02"))
    .stdout(contains("2025-09-01").not())
    .stdout(contains("2025-09-03").not());
}

#[test]
fn test_toggle_flips_status() {
    let db_path = setup_test_db("cli_toggle");
    init_db_with_data(&db_path);

    sp().args(["--db", &db_path, "toggle", "2"])
        .assert()
        .success()
        .stdout(contains("marked as paid"));

    sp().args(["--db", &db_path, "toggle", "2"])
        .assert()
        .success()
        .stdout(contains("marked as unpaid"));
}

#[test]
fn test_paid_unknown_id_fails() {
    let db_path = setup_test_db("cli_paid_missing");
    init_db_with_data(&db_path);

    sp().args(["--db", &db_path, "paid", "999"])
        .assert()
        .failure()
        .stderr(contains("Time entry 999 not found"));
}

#[test]
fn test_pay_all_twice() {
    let db_path = setup_test_db("cli_pay_all");
    init_db_with_data(&db_path);

    sp().args(["--db", &db_path, "pay-all"])
        .assert()
        .success()
        .stdout(contains("Marked 3 entries as paid. Total: $612.50"));

    sp().args(["--db", &db_path, "pay-all"])
        .assert()
        .success()
        .stdout(contains("No unpaid entries found to mark as paid."));
}

#[test]
fn test_del_with_yes() {
    let db_path = setup_test_db("cli_del");
    init_db_with_data(&db_path);

    sp().args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Entry #1 deleted successfully"));

    sp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01").not());
}

#[test]
fn test_del_cancelled_without_confirmation() {
    let db_path = setup_test_db("cli_del_cancel");
    init_db_with_data(&db_path);

    sp().args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    sp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"));
}

#[test]
fn test_settings_rate_applies_to_new_entries_only() {
    let db_path = setup_test_db("cli_settings");
    init_db_with_data(&db_path);

    sp().args(["--db", &db_path, "settings", "--rate", "30"])
        .assert()
        .success()
        .stdout(contains("Hourly rate: $30.00"));

    sp().args([
        "--db",
        &db_path,
        "add",
        "2025-09-04",
        "--start",
        "09:00",
        "--end",
        "17:00",
    ])
    .assert()
    .success()
    .stdout(contains("Pay: $240.00"));

    // the first entry keeps its original pay
    sp().args(["--db", &db_path, "list", "--to", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("$200.00"));
}

#[test]
fn test_settings_rejects_bad_rate() {
    let db_path = setup_test_db("cli_settings_bad");
    sp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sp().args(["--db", &db_path, "settings", "--rate", "0"])
        .assert()
        .failure()
        .stderr(contains("Hourly rate must be between"));

    sp().args(["--db", &db_path, "settings", "--rate", "12.345"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));
}

#[test]
fn test_export_pdf_file() {
    let db_path = setup_test_db("cli_export");
    let out = temp_out("cli_export", "pdf");
    init_db_with_data(&db_path);

    sp().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("cli_export_rel");
    init_db_with_data(&db_path);

    sp().args(["--db", &db_path, "export", "--file", "report.pdf"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_backup_json() {
    let db_path = setup_test_db("cli_backup");
    let out = temp_out("cli_backup", "json");
    init_db_with_data(&db_path);

    sp().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success();

    let text = fs::read_to_string(&out).expect("read backup");
    let v: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(v["entries"].as_array().map(|a| a.len()), Some(3));
}

#[test]
fn test_log_print_lists_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    sp().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("add"));
}

#[test]
fn test_db_check() {
    let db_path = setup_test_db("cli_db_check");
    init_db_with_data(&db_path);

    sp().args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Total entries:"));
}

#[test]
fn test_backup_compress_keeps_existing_zip_without_confirmation() {
    let db_path = setup_test_db("cli_backup_zip_exists");
    let out = temp_out("cli_backup_zip_exists", "json");
    let zip = temp_out("cli_backup_zip_exists", "zip");
    init_db_with_data(&db_path);
    fs::write(&zip, b"previous backup").expect("seed zip");

    sp().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));

    assert_eq!(fs::read(&zip).expect("read zip"), b"previous backup");
    assert!(fs::metadata(&out).is_err());

    sp().args([
        "--db",
        &db_path,
        "backup",
        "--file",
        &out,
        "--compress",
        "--force",
    ])
    .assert()
    .success();

    let bytes = fs::read(&zip).expect("read zip");
    assert!(bytes.starts_with(b"PK"));
    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_backup_compress_rejects_zip_name_before_writing() {
    let db_path = setup_test_db("cli_backup_zip_name");
    let zip = temp_out("cli_backup_zip_name", "zip");
    init_db_with_data(&db_path);
    fs::write(&zip, b"previous backup").expect("seed zip");

    sp().args([
        "--db",
        &db_path,
        "backup",
        "--file",
        &zip,
        "--compress",
        "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("already has a .zip extension"));

    assert_eq!(fs::read(&zip).expect("read zip"), b"previous backup");
}
