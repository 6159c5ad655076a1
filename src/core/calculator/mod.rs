//! Derived values of a shift: hours worked and income.

pub mod hours;
pub mod income;
pub mod interval;

pub use hours::hours_between;
pub use income::{income_for, round2};
pub use interval::check_interval;

use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    pub hours_worked: f64,
    pub income: f64,
}

/// Compute hours worked and income for a shift on `date`.
///
/// Both endpoints are taken on the same calendar day, so `end < start`
/// yields negative values; callers that accept user input go through
/// [`check_interval`] first.
pub fn derive(date: NaiveDate, start: NaiveTime, end: NaiveTime, rate: f64) -> Derived {
    let hours_worked = hours_between(date, start, end);
    Derived {
        hours_worked,
        income: income_for(hours_worked, rate),
    }
}
