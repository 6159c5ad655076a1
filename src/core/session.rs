//! Calendar view state: the selected date, its shifts, the marked dates and
//! the hourly rate, kept in sync with an injected repository.
//!
//! Storage failures never escape a session operation. They are reported on
//! stderr and the in-memory state is left as it was. Only user input errors
//! (bad rate, end before start, unknown id) are returned to the caller.

use crate::config::{DEFAULT_HOURLY_RATE, RecomputeScope};
use crate::core::calculator::check_interval;
use crate::errors::{AppError, AppResult};
use crate::models::day_totals::DayTotals;
use crate::models::shift::Shift;
use crate::store::{SaveOutcome, SettingsStore, ShiftStore, parse_rate};
use crate::ui::messages::error;
use chrono::{NaiveDate, NaiveTime, Utc};
use std::collections::BTreeSet;

pub struct CalendarSession<R: ShiftStore + SettingsStore> {
    repo: R,
    selected_date: NaiveDate,
    shifts: Vec<Shift>,
    marked_dates: BTreeSet<NaiveDate>,
    hourly_rate: f64,
}

/// Result of a successful `save_shift`.
#[derive(Debug, Clone, PartialEq)]
pub struct Saved {
    pub shift: Shift,
    pub outcome: SaveOutcome,
}

fn report(context: &str, e: &AppError) {
    error(format!("{}: {}", context, e));
}

impl<R: ShiftStore + SettingsStore> CalendarSession<R> {
    /// Load rate, shifts of `date` and marked dates from `repo`.
    pub fn open(repo: R, date: NaiveDate) -> Self {
        let mut session = Self {
            repo,
            selected_date: date,
            shifts: Vec::new(),
            marked_dates: BTreeSet::new(),
            hourly_rate: DEFAULT_HOURLY_RATE,
        };

        match session.repo.hourly_rate() {
            Ok(rate) => session.hourly_rate = rate,
            Err(e) => report("Failed to load hourly rate", &e),
        }
        session.refresh();
        session
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn marked_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.marked_dates
    }

    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    pub fn totals(&self) -> DayTotals {
        DayTotals::from_shifts(&self.shifts)
    }

    pub fn find_shift(&self, id: i64) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == id)
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_repo(self) -> R {
        self.repo
    }

    /// Switch to `date`. Returns `false` if its bucket could not be loaded.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        match self.repo.list_shifts_for_date(date) {
            Ok(shifts) => {
                self.selected_date = date;
                self.shifts = shifts;
                true
            }
            Err(e) => {
                report(&format!("Failed to load shifts for {}", date), &e);
                false
            }
        }
    }

    /// Reload the selected date's bucket and the marked dates.
    pub fn refresh(&mut self) {
        match self.repo.list_shifts_for_date(self.selected_date) {
            Ok(shifts) => self.shifts = shifts,
            Err(e) => report(
                &format!("Failed to load shifts for {}", self.selected_date),
                &e,
            ),
        }
        match self.repo.list_marked_dates() {
            Ok(marked) => self.marked_dates = marked,
            Err(e) => report("Failed to load marked dates", &e),
        }
    }

    /// Create a shift on the selected date, or edit the one with `edit_id`.
    ///
    /// `Ok(None)` means the store failed and nothing changed.
    pub fn save_shift(
        &mut self,
        start: NaiveTime,
        end: NaiveTime,
        edit_id: Option<i64>,
    ) -> AppResult<Option<Saved>> {
        check_interval(start, end)?;

        let date = self.selected_date;
        let bucket = match self.repo.list_shifts_for_date(date) {
            Ok(b) => b,
            Err(e) => {
                report(&format!("Failed to load shifts for {}", date), &e);
                return Ok(None);
            }
        };

        let id = match edit_id {
            Some(id) => {
                if !bucket.iter().any(|s| s.id == id) {
                    return Err(AppError::ShiftNotFound {
                        date: date.to_string(),
                        id,
                    });
                }
                id
            }
            None => next_id(&bucket, Utc::now().timestamp_millis()),
        };

        let shift = Shift::new(id, date, start, end, self.hourly_rate);

        let outcome = match self.repo.save_shift(date, shift.clone()) {
            Ok(o) => o,
            Err(e) => {
                report(&format!("Failed to save shift on {}", date), &e);
                return Ok(None);
            }
        };

        self.refresh();
        Ok(Some(Saved { shift, outcome }))
    }

    /// Delete shift `id` from the selected date. Deleting an unknown id is a
    /// no-op and returns `false`, as does a storage failure.
    pub fn delete_shift(&mut self, id: i64) -> bool {
        match self.repo.delete_shift(self.selected_date, id) {
            Ok(removed) => {
                if removed {
                    self.refresh();
                }
                removed
            }
            Err(e) => {
                report(
                    &format!("Failed to delete shift {} on {}", id, self.selected_date),
                    &e,
                );
                false
            }
        }
    }

    /// Parse and persist a new hourly rate, then rewrite derived values of
    /// the buckets selected by `scope`.
    ///
    /// Returns the number of rewritten records, or `Ok(None)` when the rate
    /// or the buckets could not be written. Buckets that fail during an
    /// `All` recompute are reported and skipped; the others are still
    /// rewritten. Unparseable input is an error and changes nothing.
    ///
    /// Once the rate is stored the session is reloaded on every path, so its
    /// rate and shifts match what the store holds.
    pub fn update_hourly_rate(
        &mut self,
        input: &str,
        scope: RecomputeScope,
    ) -> AppResult<Option<usize>> {
        let rate = parse_rate(input)?;

        if let Err(e) = self.repo.set_hourly_rate(rate) {
            report("Failed to save hourly rate", &e);
            return Ok(None);
        }
        self.hourly_rate = rate;

        let rewritten = match scope {
            RecomputeScope::Selected => self.repo.recompute_all_incomes(self.selected_date, rate),
            RecomputeScope::All => self.repo.recompute_every_bucket(rate).map(|summary| {
                for (date, e) in &summary.failed {
                    report(&format!("Failed to recompute shifts for {}", date), e);
                }
                summary.rewritten
            }),
        };

        self.refresh();
        match rewritten {
            Ok(n) => Ok(Some(n)),
            Err(e) => {
                report("Failed to recompute incomes", &e);
                Ok(None)
            }
        }
    }

    /// Rewrite the selected date's bucket with the current rate.
    pub fn recompute_selected(&mut self) -> Option<usize> {
        match self
            .repo
            .recompute_all_incomes(self.selected_date, self.hourly_rate)
        {
            Ok(n) => {
                self.refresh();
                Some(n)
            }
            Err(e) => {
                report(
                    &format!("Failed to recompute shifts for {}", self.selected_date),
                    &e,
                );
                None
            }
        }
    }
}

/// Creation-timestamp id, bumped past the bucket's maximum on collision.
pub fn next_id(bucket: &[Shift], now_millis: i64) -> i64 {
    if bucket.iter().any(|s| s.id == now_millis) {
        bucket.iter().map(|s| s.id).max().unwrap_or(now_millis) + 1
    } else {
        now_millis
    }
}
