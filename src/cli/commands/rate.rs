use crate::cli::parser::Commands;
use crate::config::{Config, RecomputeScope};
use crate::core::rate::RateLogic;
use crate::core::session::CalendarSession;
use crate::db::log::audit_quiet;
use crate::errors::AppResult;
use crate::utils::date;
use crate::utils::formatting::format_money;

use super::open_repository;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rate {
        set,
        date: date_arg,
        all,
        scope,
    } = cmd
    {
        let selected = match date_arg {
            Some(d) => date::parse_date_arg(d)?,
            None => date::today(),
        };

        let repo = open_repository(cfg)?;
        let mut session = CalendarSession::open(repo, selected);

        let Some(input) = set else {
            println!(
                "Hourly rate: {}",
                format_money(&cfg.currency_symbol, session.hourly_rate())
            );
            return Ok(());
        };

        let scope = if *all {
            RecomputeScope::All
        } else if date_arg.is_some() {
            RecomputeScope::Selected
        } else {
            scope.unwrap_or(cfg.rate_recompute_scope)
        };

        if let Some(n) = RateLogic::apply(&mut session, input, scope)? {
            let target = match scope {
                RecomputeScope::Selected => selected.to_string(),
                RecomputeScope::All => "all".to_string(),
            };
            audit_quiet(
                &session.repo().kv().conn,
                "rate",
                &target,
                &format!(
                    "Hourly rate set to {:.2}, {} shift(s) recomputed",
                    session.hourly_rate(),
                    n
                ),
            );
        }
    }
    Ok(())
}
