#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwl() -> Command {
    cargo_bin_cmd!("rworklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rwl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add an entry through the CLI and return its id.
pub fn add_entry(db_path: &str, date: &str, kind: &str, start: &str, end: &str) -> String {
    let out = rwl()
        .args([
            "--db", db_path, "add", date, "--type", kind, "--start", start, "--end", end,
            "--client", "ACME", "--location", "HQ",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).expect("utf8 stdout");
    let after = text
        .split("Entry ")
        .nth(1)
        .expect("add prints the new entry id");
    after
        .split_whitespace()
        .next()
        .expect("id token")
        .to_string()
}

/// Day timeline as parsed JSON.
pub fn day_json(db_path: &str, date: &str) -> serde_json::Value {
    let out = rwl()
        .args(["--db", db_path, "day", date, "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("day --json prints JSON")
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_entry(db_path, "2025-09-01", "work", "09:00", "17:00");
    add_entry(db_path, "2025-09-15", "vacation", "08:00", "16:00");
    add_entry(db_path, "2025-10-02", "work", "08:00", "12:00");
}
