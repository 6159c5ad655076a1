use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::store::keys::HOURLY_RATE_KEY;
use crate::store::repository::Repository;
use crate::ui::messages::warning;

/// Process-wide scalar settings.
pub trait SettingsStore {
    /// The stored hourly rate, or the preset default when unset.
    fn hourly_rate(&self) -> AppResult<f64>;

    fn set_hourly_rate(&mut self, rate: f64) -> AppResult<()>;
}

/// Parse user input for the hourly rate. The only rule is that it must be a
/// finite number.
pub fn parse_rate(input: &str) -> AppResult<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AppError::InvalidRate(input.to_string())),
    }
}

impl<S: KeyValueStore> SettingsStore for Repository<S> {
    fn hourly_rate(&self) -> AppResult<f64> {
        match self.kv().get_item(HOURLY_RATE_KEY)? {
            None => Ok(self.default_rate()),
            Some(raw) => match parse_rate(&raw) {
                Ok(rate) => Ok(rate),
                Err(_) => {
                    warning(format!(
                        "Stored hourly rate '{}' is not a number, using default {:.2}",
                        raw,
                        self.default_rate()
                    ));
                    Ok(self.default_rate())
                }
            },
        }
    }

    fn set_hourly_rate(&mut self, rate: f64) -> AppResult<()> {
        self.kv_mut().set_item(HOURLY_RATE_KEY, &rate.to_string())
    }
}
