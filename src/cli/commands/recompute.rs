use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::CalendarSession;
use crate::db::log::audit_quiet;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

use super::open_repository;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recompute { date: date_arg } = cmd {
        let d = date::parse_date_arg(date_arg)?;

        let repo = open_repository(cfg)?;
        let mut session = CalendarSession::open(repo, d);

        if let Some(n) = session.recompute_selected() {
            success(format!(
                "Recomputed {} shift(s) for {} at {:.2}/h",
                n,
                d,
                session.hourly_rate()
            ));
            audit_quiet(
                &session.repo().kv().conn,
                "recompute",
                &d.to_string(),
                &format!("{} shift(s) at {:.2}", n, session.hourly_rate()),
            );
        }
    }
    Ok(())
}
