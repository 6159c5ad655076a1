use crate::core::session::{CalendarSession, Saved};
use crate::errors::{AppError, AppResult};
use crate::store::{SaveOutcome, SettingsStore, ShiftStore};
use crate::ui::messages::success;
use crate::utils::time::{format_time, hours2readable};
use chrono::NaiveTime;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Create a shift on the session's date, or edit shift `edit_id`.
    ///
    /// When editing, a missing `start`/`end` keeps the stored value.
    pub fn apply<R: ShiftStore + SettingsStore>(
        session: &mut CalendarSession<R>,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
        edit_id: Option<i64>,
    ) -> AppResult<Option<Saved>> {
        let (start, end) = match edit_id {
            Some(id) => {
                let current = session.find_shift(id).ok_or_else(|| AppError::ShiftNotFound {
                    date: session.selected_date().to_string(),
                    id,
                })?;
                (
                    start.unwrap_or(current.start_time),
                    end.unwrap_or(current.end_time),
                )
            }
            None => (
                start.ok_or_else(|| AppError::MissingArgument("--start HH:MM".into()))?,
                end.ok_or_else(|| AppError::MissingArgument("--end HH:MM".into()))?,
            ),
        };

        let saved = session.save_shift(start, end, edit_id)?;

        if let Some(s) = &saved {
            let verb = match s.outcome {
                SaveOutcome::Inserted => "added",
                SaveOutcome::Replaced => "updated",
            };
            success(format!(
                "Shift #{} {} for {}: {} → {} ({}, income {:.2})",
                s.shift.id,
                verb,
                session.selected_date(),
                format_time(s.shift.start_time),
                format_time(s.shift.end_time),
                hours2readable(s.shift.hours_worked),
                s.shift.income
            ));
        }

        Ok(saved)
    }
}
