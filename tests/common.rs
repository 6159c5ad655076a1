#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use shiftcal::db::pool::DbPool;
use shiftcal::models::shift::Shift;
use shiftcal::store::{Repository, ShiftStore};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sc() -> Command {
    cargo_bin_cmd!("shiftcal")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftcal.sqlite", name));
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

pub fn init_db(db_path: &str) {
    sc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_shift(db_path: &str, date: &str, start: &str, end: &str) {
    sc().args([
        "--db", db_path, "add", date, "--start", start, "--end", end,
    ])
    .assert()
    .success();
}

/// Read a date bucket straight from the database file.
pub fn load_shifts(db_path: &str, date: &str) -> Vec<Shift> {
    let pool = DbPool::new(db_path).expect("open db");
    let repo = Repository::new(pool);
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date");
    repo.list_shifts_for_date(d).expect("list shifts")
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
