use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::session::CalendarSession;
use crate::db::log::audit_quiet;
use crate::errors::AppResult;
use crate::store::SaveOutcome;
use crate::utils::date;
use crate::utils::time::{format_time, parse_optional_time};

use super::open_repository;

/// Add or edit a shift.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        id,
        edit,
    } = cmd
    {
        let d = date::parse_date_arg(date)?;
        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;
        // clap ties --id and --edit together
        let edit_id = if *edit { *id } else { None };

        let repo = open_repository(cfg)?;
        let mut session = CalendarSession::open(repo, d);

        if let Some(saved) = AddLogic::apply(&mut session, start, end, edit_id)? {
            let op = match saved.outcome {
                SaveOutcome::Inserted => "add",
                SaveOutcome::Replaced => "edit",
            };
            audit_quiet(
                &session.repo().kv().conn,
                op,
                &d.to_string(),
                &format!(
                    "Shift #{} {}-{} ({:.2}h, {:.2})",
                    saved.shift.id,
                    format_time(saved.shift.start_time),
                    format_time(saved.shift.end_time),
                    saved.shift.hours_worked,
                    saved.shift.income
                ),
            );
        }
    }

    Ok(())
}
