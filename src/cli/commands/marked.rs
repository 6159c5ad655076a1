use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::store::ShiftStore;
use crate::utils::date;

use super::open_repository;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Marked { period } = cmd {
        let repo = open_repository(cfg)?;
        let mut marked = repo.list_marked_dates()?;

        if let Some(p) = period {
            let (from, to) = date::parse_period(p)?;
            marked.retain(|d| *d >= from && *d <= to);
        }

        ListLogic::print_marked(&marked);
    }
    Ok(())
}
