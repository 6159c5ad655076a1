//! Time utilities: parsing HH:MM, serde helpers, formatting hours.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), TIME_FORMAT).ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

/// Render fractional hours as `HHh MMm`, e.g. 7.75 → `07h 45m`.
pub fn hours2readable(hours: f64) -> String {
    let total_mins = (hours * 60.0).round() as i64;
    let sign = if total_mins < 0 { "-" } else { "" };
    let m = total_mins.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}

/// Serde adapter storing a `NaiveTime` as an `"HH:MM"` string.
pub mod hhmm {
    use super::TIME_FORMAT;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(t: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&t.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT)
            // tolerate "HH:MM:SS" values written by other tools
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}
