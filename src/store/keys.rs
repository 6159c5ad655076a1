use chrono::NaiveDate;

pub const SHIFT_BUCKET_PREFIX: &str = "shifts-";
pub const HOURLY_RATE_KEY: &str = "hourlyRate";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `shifts-YYYY-MM-DD`
pub fn bucket_key(date: NaiveDate) -> String {
    format!("{}{}", SHIFT_BUCKET_PREFIX, date.format(DATE_FORMAT))
}

/// Inverse of [`bucket_key`]; `None` for keys that are not date buckets.
///
/// Only the canonical zero-padded form is accepted, so `shifts-2024-6-1`
/// is not a bucket of 2024-06-01.
pub fn date_from_bucket_key(key: &str) -> Option<NaiveDate> {
    let raw = key.strip_prefix(SHIFT_BUCKET_PREFIX)?;
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()?;
    (bucket_key(date) == key).then_some(date)
}
