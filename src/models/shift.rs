use crate::core::calculator;
use crate::utils::time::hhmm;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single work interval recorded against a date.
///
/// Serialized exactly as stored in a date bucket:
/// `{"id":…,"startTime":"HH:MM","endTime":"HH:MM","hoursWorked":…,"income":…}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Creation timestamp in milliseconds; unique within its date bucket.
    pub id: i64,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub hours_worked: f64,
    pub income: f64,
}

impl Shift {
    /// Build a shift with its derived values already computed.
    pub fn new(id: i64, date: NaiveDate, start: NaiveTime, end: NaiveTime, rate: f64) -> Self {
        let derived = calculator::derive(date, start, end, rate);
        Self {
            id,
            start_time: start,
            end_time: end,
            hours_worked: derived.hours_worked,
            income: derived.income,
        }
    }

    /// Rewrite `hours_worked` / `income` for the given rate.
    pub fn recompute(&mut self, date: NaiveDate, rate: f64) {
        let derived = calculator::derive(date, self.start_time, self.end_time, rate);
        self.hours_worked = derived.hours_worked;
        self.income = derived.income;
    }
}
