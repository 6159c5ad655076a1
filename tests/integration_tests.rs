use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_shift, init_db, load_shifts, sc, setup_test_db, temp_out};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    sc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('kv','log')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 2);
}

#[test]
fn test_add_computes_hours_and_income() {
    let db_path = setup_test_db("add_basic");
    init_db(&db_path);

    sc().args([
        "--db", &db_path, "add", "2024-06-01", "--start", "09:00", "--end", "17:00",
    ])
    .assert()
    .success()
    .stdout(contains("added").and(contains("100.80")));

    let shifts = load_shifts(&db_path, "2024-06-01");
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].hours_worked, 8.0);
    assert_eq!(shifts[0].income, 100.80);
}

#[test]
fn test_add_requires_both_times() {
    let db_path = setup_test_db("add_missing_end");
    init_db(&db_path);

    sc().args(["--db", &db_path, "add", "2024-06-01", "--start", "09:00"])
        .assert()
        .failure()
        .stderr(contains("--end"));

    assert!(load_shifts(&db_path, "2024-06-01").is_empty());
}

#[test]
fn test_add_rejects_end_before_start() {
    let db_path = setup_test_db("add_overnight");
    init_db(&db_path);

    sc().args([
        "--db", &db_path, "add", "2024-06-01", "--start", "22:00", "--end", "06:00",
    ])
    .assert()
    .failure()
    .stderr(contains("before start time"));

    assert!(load_shifts(&db_path, "2024-06-01").is_empty());
}

#[test]
fn test_add_rejects_bad_time_and_date() {
    let db_path = setup_test_db("add_bad_input");
    init_db(&db_path);

    sc().args([
        "--db", &db_path, "add", "2024-06-01", "--start", "9am", "--end", "17:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time format"));

    sc().args([
        "--db", &db_path, "add", "2024-13-01", "--start", "09:00", "--end", "17:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));
}

#[test]
fn test_edit_keeps_id_and_updates_values() {
    let db_path = setup_test_db("edit_shift");
    init_db(&db_path);
    add_shift(&db_path, "2024-06-01", "09:00", "17:00");

    let id = load_shifts(&db_path, "2024-06-01")[0].id.to_string();

    sc().args([
        "--db", &db_path, "add", "2024-06-01", "--edit", "--id", &id, "--end", "13:00",
    ])
    .assert()
    .success()
    .stdout(contains("updated"));

    let shifts = load_shifts(&db_path, "2024-06-01");
    assert_eq!(shifts.len(), 1);
    assert_eq!(shifts[0].id.to_string(), id);
    assert_eq!(shifts[0].hours_worked, 4.0);
    assert_eq!(shifts[0].income, 50.40);
}

#[test]
fn test_id_without_edit_is_rejected() {
    let db_path = setup_test_db("add_id_without_edit");
    init_db(&db_path);

    sc().args([
        "--db", &db_path, "add", "2024-06-01", "--start", "09:00", "--end", "17:00", "--id", "5",
    ])
    .assert()
    .failure()
    .stderr(contains("--edit"));

    assert!(load_shifts(&db_path, "2024-06-01").is_empty());
}

#[test]
fn test_edit_unknown_id_fails() {
    let db_path = setup_test_db("edit_unknown");
    init_db(&db_path);
    add_shift(&db_path, "2024-06-01", "09:00", "17:00");

    sc().args([
        "--db", &db_path, "add", "2024-06-01", "--edit", "--id", "1", "--start", "10:00",
    ])
    .assert()
    .failure()
    .stderr(contains("No shift with id 1"));
}

#[test]
fn test_list_day_shows_shifts_and_totals() {
    let db_path = setup_test_db("list_day");
    init_db(&db_path);
    add_shift(&db_path, "2024-06-01", "09:00", "17:00");
    add_shift(&db_path, "2024-06-01", "18:00", "20:00");

    sc().args(["--db", &db_path, "list", "2024-06-01"])
        .assert()
        .success()
        .stdout(
            contains("1 June 2024")
                .and(contains("09:00"))
                .and(contains("20:00"))
                .and(contains("2 shift(s)"))
                .and(contains("10h 00m"))
                .and(contains("126.00")),
        );
}

#[test]
fn test_list_period_skips_other_months() {
    let db_path = setup_test_db("list_period");
    init_db(&db_path);
    add_shift(&db_path, "2024-06-01", "09:00", "17:00");
    add_shift(&db_path, "2024-07-01", "09:00", "12:00");

    sc().args(["--db", &db_path, "list", "--period", "2024-06"])
        .assert()
        .success()
        .stdout(
            contains("2024-06-01")
                .and(contains("Period (1 day(s))"))
                .and(contains("2024-07-01").not()),
        );
}

#[test]
fn test_delete_shift_and_noop_on_unknown_id() {
    let db_path = setup_test_db("del_shift");
    init_db(&db_path);
    add_shift(&db_path, "2024-06-01", "09:00", "17:00");
    add_shift(&db_path, "2024-06-01", "18:00", "20:00");

    let id = load_shifts(&db_path, "2024-06-01")[0].id.to_string();

    sc().args(["--db", &db_path, "del", "2024-06-01", "--id", "42", "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing deleted"));
    assert_eq!(load_shifts(&db_path, "2024-06-01").len(), 2);

    sc().args(["--db", &db_path, "del", "2024-06-01", "--id", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted shift"));

    let remaining = load_shifts(&db_path, "2024-06-01");
    assert_eq!(remaining.len(), 1);
    assert_ne!(remaining[0].id.to_string(), id);
}

#[test]
fn test_delete_without_confirmation_is_cancelled() {
    let db_path = setup_test_db("del_cancel");
    init_db(&db_path);
    add_shift(&db_path, "2024-06-01", "09:00", "17:00");
    let id = load_shifts(&db_path, "2024-06-01")[0].id.to_string();

    sc().args(["--db", &db_path, "del", "2024-06-01", "--id", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    assert_eq!(load_shifts(&db_path, "2024-06-01").len(), 1);
}

#[test]
fn test_marked_lists_only_non_empty_dates() {
    let db_path = setup_test_db("marked_dates");
    init_db(&db_path);
    add_shift(&db_path, "2024-06-01", "09:00", "17:00");
    add_shift(&db_path, "2024-06-03", "09:00", "17:00");
    add_shift(&db_path, "2024-07-10", "09:00", "17:00");

    let id = load_shifts(&db_path, "2024-06-03")[0].id.to_string();
    sc().args(["--db", &db_path, "del", "2024-06-03", "--id", &id, "--yes"])
        .assert()
        .success();

    sc().args(["--db", &db_path, "marked"])
        .assert()
        .success()
        .stdout(
            contains("2024-06-01")
                .and(contains("2024-07-10"))
                .and(contains("2024-06-03").not())
                .and(contains("2 date(s)")),
        );

    sc().args(["--db", &db_path, "marked", "--period", "2024-07"])
        .assert()
        .success()
        .stdout(contains("2024-07-10").and(contains("2024-06-01").not()));
}

#[test]
fn test_rate_defaults_and_rejects_non_numeric_input() {
    let db_path = setup_test_db("rate_invalid");
    init_db(&db_path);

    sc().args(["--db", &db_path, "rate"])
        .assert()
        .success()
        .stdout(contains("12.60"));

    sc().args(["--db", &db_path, "rate", "--set", "abc", "--all"])
        .assert()
        .failure()
        .stderr(contains("Invalid hourly rate"));

    sc().args(["--db", &db_path, "rate"])
        .assert()
        .success()
        .stdout(contains("12.60"));
}

#[test]
fn test_rate_for_selected_date_leaves_other_dates_stale() {
    let db_path = setup_test_db("rate_selected");
    init_db(&db_path);
    add_shift(&db_path, "2024-06-01", "09:00", "17:00");
    add_shift(&db_path, "2024-06-02", "09:00", "17:00");

    sc().args(["--db", &db_path, "rate", "--set", "20", "--date", "2024-06-01"])
        .assert()
        .success()
        .stdout(contains("Recomputed 1 shift(s) for 2024-06-01"));

    assert_eq!(load_shifts(&db_path, "2024-06-01")[0].income, 160.0);
    assert_eq!(load_shifts(&db_path, "2024-06-02")[0].income, 100.80);

    sc().args(["--db", &db_path, "recompute", "2024-06-02"])
        .assert()
        .success()
        .stdout(contains("Recomputed 1 shift(s)"));

    assert_eq!(load_shifts(&db_path, "2024-06-02")[0].income, 160.0);
}

#[test]
fn test_rate_for_all_dates() {
    let db_path = setup_test_db("rate_all");
    init_db(&db_path);
    add_shift(&db_path, "2024-06-01", "09:00", "17:00");
    add_shift(&db_path, "2024-08-15", "09:00", "13:00");

    sc().args(["--db", &db_path, "rate", "--set", "10", "--all"])
        .assert()
        .success()
        .stdout(contains("across all dates"));

    assert_eq!(load_shifts(&db_path, "2024-06-01")[0].income, 80.0);
    assert_eq!(load_shifts(&db_path, "2024-08-15")[0].income, 40.0);

    sc().args(["--db", &db_path, "rate"])
        .assert()
        .success()
        .stdout(contains("10.00"));

    // shifts added afterwards use the new rate
    add_shift(&db_path, "2024-08-16", "09:00", "11:00");
    assert_eq!(load_shifts(&db_path, "2024-08-16")[0].income, 20.0);
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("export_basic");
    init_db(&db_path);
    add_shift(&db_path, "2024-06-01", "09:00", "17:00");
    add_shift(&db_path, "2024-07-01", "09:00", "12:00");

    let csv_out = temp_out("export_basic_csv", "csv");
    sc().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &csv_out, "--range", "2024-06",
    ])
    .assert()
    .success();

    let csv = fs::read_to_string(&csv_out).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "date,id,start_time,end_time,hours_worked,income"
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("2024-06-01,"));
    assert!(row.ends_with(",09:00,17:00,8.0,100.8"));
    assert!(lines.next().is_none());

    let json_out = temp_out("export_basic_json", "json");
    sc().args([
        "--db", &db_path, "export", "--format", "json", "--file", &json_out, "--force",
    ])
    .assert()
    .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["date"], "2024-07-01");
    assert_eq!(rows[1]["hours_worked"], 3.0);
}

#[test]
fn test_export_xlsx_writes_file() {
    let db_path = setup_test_db("export_xlsx");
    init_db(&db_path);
    add_shift(&db_path, "2024-06-01", "09:00", "17:00");

    let out = temp_out("export_xlsx", "xlsx");
    sc().args(["--db", &db_path, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).unwrap();
    // xlsx is a zip container
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);
    add_shift(&db_path, "2024-06-01", "09:00", "17:00");

    let out = temp_out("export_empty", "csv");
    sc().args(["--db", &db_path, "export", "--file", &out, "--range", "2023"])
        .assert()
        .success()
        .stdout(contains("No shifts found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("log_print");
    init_db(&db_path);
    add_shift(&db_path, "2024-06-01", "09:00", "17:00");
    sc().args(["--db", &db_path, "rate", "--set", "11", "--all"])
        .assert()
        .success();

    sc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("init")
                .and(contains("migration_applied"))
                .and(contains("2024-06-01"))
                .and(contains("Hourly rate set to 11.00")),
        );
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup_db");
    init_db(&db_path);
    add_shift(&db_path, "2024-06-01", "09:00", "17:00");

    let out = temp_out("backup_plain", "sqlite");
    sc().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success();
    assert_eq!(load_shifts(&out, "2024-06-01").len(), 1);

    let zipped = temp_out("backup_zip", "zip");
    let base = temp_out("backup_zip", "sqlite");
    sc().args(["--db", &db_path, "backup", "--file", &base, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert!(std::path::Path::new(&zipped).exists());
    assert!(!std::path::Path::new(&base).exists());
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);
    add_shift(&db_path, "2024-06-01", "09:00", "17:00");
    add_shift(&db_path, "2024-06-05", "09:00", "17:00");

    sc().args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(
            contains("Integrity check passed")
                .and(contains("Total shifts:"))
                .and(contains("2024-06-01"))
                .and(contains("2024-06-05")),
        );
}
