use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit_quiet;
use crate::errors::AppResult;
use crate::export::ExportLogic;

use super::open_repository;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let repo = open_repository(cfg)?;
        let count = ExportLogic::export(&repo, *format, file, range.as_deref(), *force)?;

        if count > 0 {
            audit_quiet(
                &repo.kv().conn,
                "export",
                file,
                &format!("{} shift(s) exported as {}", count, format.as_str()),
            );
        }
    }

    Ok(())
}
