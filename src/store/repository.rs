use crate::config::DEFAULT_HOURLY_RATE;
use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use crate::store::keys::bucket_key;
use chrono::NaiveDate;

/// Repository implementing both [`ShiftStore`](super::ShiftStore) and
/// [`SettingsStore`](super::SettingsStore) on top of any key-value backend.
pub struct Repository<S: KeyValueStore> {
    kv: S,
    default_rate: f64,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(kv: S) -> Self {
        Self::with_default_rate(kv, DEFAULT_HOURLY_RATE)
    }

    pub fn with_default_rate(kv: S, default_rate: f64) -> Self {
        Self { kv, default_rate }
    }

    pub fn default_rate(&self) -> f64 {
        self.default_rate
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    pub fn kv_mut(&mut self) -> &mut S {
        &mut self.kv
    }

    pub fn into_inner(self) -> S {
        self.kv
    }

    pub(crate) fn read_bucket(&self, date: NaiveDate) -> AppResult<Vec<Shift>> {
        let key = bucket_key(date);
        self.read_bucket_key(&key)
    }

    pub(crate) fn read_bucket_key(&self, key: &str) -> AppResult<Vec<Shift>> {
        match self.kv.get_item(key)? {
            None => Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| AppError::CorruptRecord {
                key: key.to_string(),
                source,
            }),
        }
    }

    pub(crate) fn write_bucket(&mut self, date: NaiveDate, shifts: &[Shift]) -> AppResult<()> {
        let json = serde_json::to_string(shifts)?;
        self.kv.set_item(&bucket_key(date), &json)
    }
}
