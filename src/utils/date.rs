use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Parse a date argument, accepting `today` as a shortcut.
pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    if s.eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// `1 June 2024`
pub fn format_long(d: NaiveDate) -> String {
    format!("{} {}", d.day(), d.format("%B %Y"))
}

/// Current month as an inclusive (first day, last day) pair.
pub fn current_month() -> (NaiveDate, NaiveDate) {
    let t = today();
    month_bounds(t.year(), t.month()).unwrap_or((t, t))
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((first, last))
}

fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ))
}

/// Bounds of a single period: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn single_period(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => year_bounds(p.parse().ok()?),
        7 => {
            let (y, m) = p.split_once('-')?;
            month_bounds(y.parse().ok()?, m.parse().ok()?)
        }
        10 => {
            let d = parse_date(p)?;
            Some((d, d))
        }
        _ => None,
    }
}

/// Parse a period or range into inclusive bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(format!("unsupported period '{}'", r));

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "start and end of '{}' must have the same format",
                r
            )));
        }

        let (from, _) = single_period(start).ok_or_else(invalid)?;
        let (_, to) = single_period(end).ok_or_else(invalid)?;

        if to < from {
            return Err(AppError::InvalidDate(format!(
                "period '{}' ends before it starts",
                r
            )));
        }
        return Ok((from, to));
    }

    single_period(r.trim()).ok_or_else(invalid)
}
