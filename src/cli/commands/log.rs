use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

use super::open_repository;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let repo = open_repository(cfg)?;
        LogLogic::print_log(&repo.kv().conn)?;
    }

    Ok(())
}
