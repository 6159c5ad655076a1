use crate::core::session::CalendarSession;
use crate::store::{SettingsStore, ShiftStore};
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove shift `id` from the session's date. Unknown ids are a no-op.
    pub fn apply<R: ShiftStore + SettingsStore>(session: &mut CalendarSession<R>, id: i64) -> bool {
        let removed = session.delete_shift(id);

        if removed {
            info(format!(
                "Deleted shift #{} for {}",
                id,
                session.selected_date()
            ));
        } else {
            info(format!(
                "No shift #{} on {}; nothing deleted",
                id,
                session.selected_date()
            ));
        }

        removed
    }
}
