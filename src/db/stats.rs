use crate::errors::AppResult;
use crate::models::day_totals::DayTotals;
use crate::store::{Repository, SettingsStore, ShiftStore};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use std::fs;

use super::pool::DbPool;

/// Print database statistics: file size, buckets, shifts, date range, rate.
pub fn print_db_info(repo: &Repository<DbPool>) -> AppResult<()> {
    let db_path = &repo.kv().path;
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    let buckets = repo.list_bucket_dates()?;
    let marked = repo.list_marked_dates()?;
    let all = repo.list_shifts_in_range(NaiveDate::MIN, NaiveDate::MAX)?;
    let totals = DayTotals::from_shifts(all.iter().flat_map(|(_, s)| s.iter()));

    println!(
        "{}• Date buckets:{} {} ({} with shifts)",
        CYAN,
        RESET,
        buckets.len(),
        marked.len()
    );
    println!(
        "{}• Total shifts:{} {}{}{}",
        CYAN, RESET, GREEN, totals.shifts, RESET
    );

    let fmt_date = |d: Option<&NaiveDate>| match d {
        Some(d) => d.to_string(),
        None => format!("{GREY}--{RESET}"),
    };
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_date(marked.first()));
    println!("    to:   {}", fmt_date(marked.last()));

    println!(
        "{}• Hourly rate:{} {:.2}",
        CYAN,
        RESET,
        repo.hourly_rate()?
    );

    println!();
    Ok(())
}
