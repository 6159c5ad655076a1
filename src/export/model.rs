use crate::models::shift::Shift;
use crate::utils::time::format_time;
use chrono::NaiveDate;
use serde::Serialize;

/// Flat row used by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ShiftExport {
    pub date: String,
    pub id: i64,
    pub start_time: String,
    pub end_time: String,
    pub hours_worked: f64,
    pub income: f64,
}

impl ShiftExport {
    pub fn from_shift(date: NaiveDate, s: &Shift) -> Self {
        Self {
            date: date.to_string(),
            id: s.id,
            start_time: format_time(s.start_time),
            end_time: format_time(s.end_time),
            hours_worked: s.hours_worked,
            income: s.income,
        }
    }
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "id",
        "start_time",
        "end_time",
        "hours_worked",
        "income",
    ]
}
