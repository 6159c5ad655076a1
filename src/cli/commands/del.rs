use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::session::CalendarSession;
use crate::db::log::audit_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::date;

use super::open_repository;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        id,
        yes,
    } = cmd
    {
        let d = date::parse_date_arg(date_str)?;

        if !*yes
            && !ask_confirmation(&format!(
                "Delete shift #{} for {}? This action is irreversible.",
                id, d
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let repo = open_repository(cfg)?;
        let mut session = CalendarSession::open(repo, d);

        if DeleteLogic::apply(&mut session, *id) {
            audit_quiet(
                &session.repo().kv().conn,
                "del",
                &d.to_string(),
                &format!("Shift #{} deleted", id),
            );
        }
    }

    Ok(())
}
