use chrono::{NaiveDate, NaiveTime};
use shiftcal::core::calculator::{check_interval, derive, hours_between, income_for, round2};
use shiftcal::errors::AppError;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn test_full_day_at_default_rate() {
    let d = derive(june_first(), t(9, 0), t(17, 0), 12.60);
    assert_eq!(d.hours_worked, 8.0);
    assert_eq!(d.income, 100.80);
}

#[test]
fn test_fractional_hours() {
    assert_eq!(hours_between(june_first(), t(9, 15), t(13, 0)), 3.75);
    // 7h20m at 11.44 = 83.8933… → 83.89
    let d = derive(june_first(), t(8, 40), t(16, 0), 11.44);
    assert!((d.hours_worked - 22.0 / 3.0).abs() < 1e-12);
    assert_eq!(d.income, 83.89);
}

#[test]
fn test_income_is_rounded_to_cents() {
    assert_eq!(income_for(1.0 / 3.0, 10.0), 3.33);
    assert_eq!(income_for(2.0 / 3.0, 10.0), 6.67);
    assert_eq!(income_for(0.0, 12.60), 0.0);
    assert_eq!(round2(2.345_000_1), 2.35);
    assert_eq!(round2(-2.345_000_1), -2.35);
}

#[test]
fn test_end_before_start_yields_negative_values() {
    let d = derive(june_first(), t(17, 0), t(9, 0), 12.60);
    assert_eq!(d.hours_worked, -8.0);
    assert_eq!(d.income, -100.80);
}

#[test]
fn test_check_interval_rejects_end_before_start() {
    let err = check_interval(t(22, 0), t(6, 0)).unwrap_err();
    assert!(matches!(err, AppError::InvalidInterval { .. }));
    assert!(err.to_string().contains("22:00"));
}

#[test]
fn test_check_interval_accepts_zero_length() {
    assert!(check_interval(t(9, 0), t(9, 0)).is_ok());
    assert!(check_interval(t(0, 0), t(23, 59)).is_ok());
}
