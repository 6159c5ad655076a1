mod common;

use common::ymd;
use shiftcal::utils::date::{format_long, parse_date_arg, parse_period};

#[test]
fn test_parse_single_periods() {
    assert_eq!(
        parse_period("2024").unwrap(),
        (ymd(2024, 1, 1), ymd(2024, 12, 31))
    );
    assert_eq!(
        parse_period("2024-02").unwrap(),
        (ymd(2024, 2, 1), ymd(2024, 2, 29))
    );
    assert_eq!(
        parse_period("2023-02").unwrap(),
        (ymd(2023, 2, 1), ymd(2023, 2, 28))
    );
    assert_eq!(
        parse_period("2024-12").unwrap(),
        (ymd(2024, 12, 1), ymd(2024, 12, 31))
    );
    assert_eq!(
        parse_period("2024-06-01").unwrap(),
        (ymd(2024, 6, 1), ymd(2024, 6, 1))
    );
}

#[test]
fn test_parse_ranges() {
    assert_eq!(
        parse_period("2023:2024").unwrap(),
        (ymd(2023, 1, 1), ymd(2024, 12, 31))
    );
    assert_eq!(
        parse_period("2024-05:2024-06").unwrap(),
        (ymd(2024, 5, 1), ymd(2024, 6, 30))
    );
    assert_eq!(
        parse_period("2024-05-20:2024-06-03").unwrap(),
        (ymd(2024, 5, 20), ymd(2024, 6, 3))
    );
}

#[test]
fn test_parse_period_rejects_bad_input() {
    assert!(parse_period("2024-13").is_err());
    assert!(parse_period("2024:2024-06").is_err());
    assert!(parse_period("2024-06:2024-05").is_err());
    assert!(parse_period("June").is_err());
}

#[test]
fn test_date_arguments() {
    assert_eq!(parse_date_arg("2024-06-01").unwrap(), ymd(2024, 6, 1));
    assert!(parse_date_arg("today").is_ok());
    assert!(parse_date_arg("01/06/2024").is_err());
}

#[test]
fn test_format_long() {
    assert_eq!(format_long(ymd(2024, 6, 1)), "1 June 2024");
    assert_eq!(format_long(ymd(2025, 12, 25)), "25 December 2025");
}
