use crate::config::RecomputeScope;
use crate::core::session::CalendarSession;
use crate::errors::AppResult;
use crate::store::{SettingsStore, ShiftStore};
use crate::ui::messages::{success, warning};

pub struct RateLogic;

impl RateLogic {
    /// Set a new hourly rate from raw user input and recompute shifts.
    pub fn apply<R: ShiftStore + SettingsStore>(
        session: &mut CalendarSession<R>,
        input: &str,
        scope: RecomputeScope,
    ) -> AppResult<Option<usize>> {
        let rewritten = session.update_hourly_rate(input, scope)?;

        if let Some(n) = rewritten {
            success(format!("Hourly rate set to {:.2}", session.hourly_rate()));
            match scope {
                RecomputeScope::Selected => {
                    success(format!(
                        "Recomputed {} shift(s) for {}",
                        n,
                        session.selected_date()
                    ));
                    warning("Shifts on other dates keep the income computed with the previous rate.");
                }
                RecomputeScope::All => {
                    success(format!("Recomputed {} shift(s) across all dates", n));
                }
            }
        }

        Ok(rewritten)
    }
}
