#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sp() -> Command {
    let mut cmd = cargo_bin_cmd!("shiftpay");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftpay.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add two day shifts and one overnight shift
pub fn init_db_with_data(db_path: &str) {
    sp().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (date, start, end) in [
        ("2025-09-01", "09:00", "17:00"),
        ("2025-09-02", "09:00", "17:30"),
        ("2025-09-03", "22:00", "06:00"),
    ] {
        sp().args([
            "--db", db_path, "add", date, "--start", start, "--end", end,
        ])
        .assert()
        .success();
    }
}
