use crate::errors::{AppError, AppResult};
use crate::utils::time::format_time;
use chrono::NaiveTime;

/// Reject shifts ending before they start (midnight crossing is not supported).
/// A zero-length shift is accepted.
pub fn check_interval(start: NaiveTime, end: NaiveTime) -> AppResult<()> {
    if end < start {
        return Err(AppError::InvalidInterval {
            start: format_time(start),
            end: format_time(end),
        });
    }
    Ok(())
}
