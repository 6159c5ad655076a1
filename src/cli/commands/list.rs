use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::core::session::CalendarSession;
use crate::errors::AppResult;
use crate::store::ShiftStore;
use crate::utils::date;
use crate::utils::formatting::format_money;

use super::open_repository;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date: date_arg,
        period,
        today,
    } = cmd
    {
        let single = if *today {
            Some(date::today())
        } else {
            date_arg.as_deref().map(date::parse_date_arg).transpose()?
        };

        let repo = open_repository(cfg)?;

        match single {
            Some(d) => {
                let session = CalendarSession::open(repo, d);
                println!(
                    "Hourly rate: {}",
                    format_money(&cfg.currency_symbol, session.hourly_rate())
                );
                ListLogic::print_day(cfg, d, session.shifts());
            }
            None => {
                let (from, to) = match period {
                    Some(p) => date::parse_period(p)?,
                    None => date::current_month(),
                };
                let buckets = repo.list_shifts_in_range(from, to)?;
                println!("Shifts from {} to {}", from, to);
                ListLogic::print_period(cfg, &buckets);
            }
        }
    }
    Ok(())
}
