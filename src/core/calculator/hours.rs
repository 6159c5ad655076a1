use chrono::{NaiveDate, NaiveTime};

/// Wall-clock difference `end - start` in hours, both on `date`.
pub fn hours_between(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> f64 {
    let duration = date.and_time(end) - date.and_time(start);
    duration.num_seconds() as f64 / 3600.0
}
