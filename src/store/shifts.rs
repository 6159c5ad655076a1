use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use crate::store::keys::{SHIFT_BUCKET_PREFIX, date_from_bucket_key};
use crate::store::repository::Repository;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Inserted,
    Replaced,
}

/// Outcome of a rate recompute over every bucket.
#[derive(Debug, Default)]
pub struct RecomputeSummary {
    /// Records rewritten across all buckets that succeeded.
    pub rewritten: usize,
    /// Buckets left untouched, with the error that stopped each one.
    pub failed: Vec<(NaiveDate, AppError)>,
}

impl RecomputeSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_dates(&self) -> Vec<NaiveDate> {
        self.failed.iter().map(|(d, _)| *d).collect()
    }
}

/// Per-date buckets of shift records.
pub trait ShiftStore {
    /// Shifts stored for `date`, in insertion order. A missing bucket is empty.
    fn list_shifts_for_date(&self, date: NaiveDate) -> AppResult<Vec<Shift>>;

    /// Append `shift` to the bucket, or replace the record with the same id.
    fn save_shift(&mut self, date: NaiveDate, shift: Shift) -> AppResult<SaveOutcome>;

    /// Remove the record with `id`. Returns `false` (and writes nothing)
    /// when the id is not in the bucket.
    fn delete_shift(&mut self, date: NaiveDate, id: i64) -> AppResult<bool>;

    /// Dates whose bucket holds at least one shift. Corrupt buckets are
    /// reported and left unmarked.
    fn list_marked_dates(&self) -> AppResult<BTreeSet<NaiveDate>>;

    /// Rewrite hours/income of every record of `date`'s bucket with `rate`.
    /// Returns the number of records rewritten.
    fn recompute_all_incomes(&mut self, date: NaiveDate, rate: f64) -> AppResult<usize>;

    /// [`recompute_all_incomes`](Self::recompute_all_incomes) over every bucket.
    ///
    /// A bucket that fails is recorded in the summary and the remaining
    /// buckets are still rewritten. Only a failure to list the buckets is
    /// returned as an error.
    fn recompute_every_bucket(&mut self, rate: f64) -> AppResult<RecomputeSummary> {
        let mut summary = RecomputeSummary::default();
        for date in self.list_bucket_dates()? {
            match self.recompute_all_incomes(date, rate) {
                Ok(n) => summary.rewritten += n,
                Err(e) => summary.failed.push((date, e)),
            }
        }
        Ok(summary)
    }

    /// Dates that have a bucket key, empty or not.
    fn list_bucket_dates(&self) -> AppResult<BTreeSet<NaiveDate>>;

    /// Non-empty buckets with `from <= date <= to`, ordered by date.
    fn list_shifts_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<(NaiveDate, Vec<Shift>)>> {
        let mut out = Vec::new();
        for date in self.list_bucket_dates()? {
            if date < from || date > to {
                continue;
            }
            let shifts = self.list_shifts_for_date(date)?;
            if !shifts.is_empty() {
                out.push((date, shifts));
            }
        }
        Ok(out)
    }
}

impl<S: KeyValueStore> ShiftStore for Repository<S> {
    fn list_shifts_for_date(&self, date: NaiveDate) -> AppResult<Vec<Shift>> {
        self.read_bucket(date)
    }

    fn save_shift(&mut self, date: NaiveDate, shift: Shift) -> AppResult<SaveOutcome> {
        let mut bucket = self.read_bucket(date)?;

        let outcome = match bucket.iter().position(|s| s.id == shift.id) {
            Some(idx) => {
                bucket[idx] = shift;
                SaveOutcome::Replaced
            }
            None => {
                bucket.push(shift);
                SaveOutcome::Inserted
            }
        };

        self.write_bucket(date, &bucket)?;
        Ok(outcome)
    }

    fn delete_shift(&mut self, date: NaiveDate, id: i64) -> AppResult<bool> {
        let mut bucket = self.read_bucket(date)?;
        let before = bucket.len();
        bucket.retain(|s| s.id != id);

        if bucket.len() == before {
            return Ok(false);
        }

        self.write_bucket(date, &bucket)?;
        Ok(true)
    }

    fn list_marked_dates(&self) -> AppResult<BTreeSet<NaiveDate>> {
        let mut marked = BTreeSet::new();
        for key in self.kv().keys_with_prefix(SHIFT_BUCKET_PREFIX)? {
            let Some(date) = date_from_bucket_key(&key) else {
                continue;
            };
            match self.read_bucket_key(&key) {
                Ok(shifts) if !shifts.is_empty() => {
                    marked.insert(date);
                }
                Ok(_) => {}
                Err(e @ AppError::CorruptRecord { .. }) => {
                    warning(format!("Skipping {}: {}", date, e));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(marked)
    }

    fn recompute_all_incomes(&mut self, date: NaiveDate, rate: f64) -> AppResult<usize> {
        let mut bucket = self.read_bucket(date)?;
        if bucket.is_empty() {
            return Ok(0);
        }

        for shift in bucket.iter_mut() {
            shift.recompute(date, rate);
        }

        self.write_bucket(date, &bucket)?;
        Ok(bucket.len())
    }

    fn list_bucket_dates(&self) -> AppResult<BTreeSet<NaiveDate>> {
        Ok(self
            .kv()
            .keys_with_prefix(SHIFT_BUCKET_PREFIX)?
            .iter()
            .filter_map(|k| date_from_bucket_key(k))
            .collect())
    }
}
