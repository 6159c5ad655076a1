use crate::config::Config;
use crate::models::day_totals::DayTotals;
use crate::models::shift::Shift;
use crate::utils::colors::{CYAN, GREY, RESET, YELLOW, color_for_amount};
use crate::utils::date::format_long;
use crate::utils::formatting::{bold, format_money, separator};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_time, hours2readable};
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub struct ListLogic;

impl ListLogic {
    /// Print one date's shifts followed by the day totals.
    pub fn print_day(cfg: &Config, date: NaiveDate, shifts: &[Shift]) {
        println!(
            "\n{}=== {} ({}) ==={}",
            CYAN,
            format_long(date),
            date,
            RESET
        );

        if shifts.is_empty() {
            println!("{}No shifts for {}{}", GREY, date, RESET);
            return;
        }

        println!("{}", shift_table(cfg, shifts).render());
        print_totals(cfg, "Total", &DayTotals::from_shifts(shifts));
    }

    /// Print every non-empty date in a period, then the period totals.
    pub fn print_period(cfg: &Config, buckets: &[(NaiveDate, Vec<Shift>)]) {
        if buckets.is_empty() {
            println!("{}No shifts in the selected period{}", GREY, RESET);
            return;
        }

        for (date, shifts) in buckets {
            Self::print_day(cfg, *date, shifts);
        }

        let all = DayTotals::from_shifts(buckets.iter().flat_map(|(_, s)| s.iter()));
        println!("{}", separator(&cfg.separator_char, 48));
        print_totals(
            cfg,
            &format!("Period ({} day(s))", buckets.len()),
            &all,
        );
    }

    pub fn print_marked(dates: &BTreeSet<NaiveDate>) {
        if dates.is_empty() {
            println!("{}No dates with shifts{}", GREY, RESET);
            return;
        }

        println!("📅 {}", bold("Dates with shifts:"));
        for d in dates {
            println!("  {}{}{}  {}", YELLOW, d, RESET, format_long(*d));
        }
        println!("{} date(s)", dates.len());
    }
}

fn shift_table(cfg: &Config, shifts: &[Shift]) -> Table {
    let id_w = shifts
        .iter()
        .map(|s| s.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut table = Table::new(vec![
        Column::new("ID", id_w),
        Column::new("START", 5),
        Column::new("END", 5),
        Column::new("HOURS", 8),
        Column::new("INCOME", 10),
    ]);

    for s in shifts {
        table.add_row(vec![
            s.id.to_string(),
            format_time(s.start_time),
            format_time(s.end_time),
            hours2readable(s.hours_worked),
            format_money(&cfg.currency_symbol, s.income),
        ]);
    }

    table
}

fn print_totals(cfg: &Config, label: &str, totals: &DayTotals) {
    println!(
        "{}: {} shift(s) | {} | {}{}{}",
        label,
        totals.shifts,
        hours2readable(totals.hours_worked),
        color_for_amount(totals.income),
        format_money(&cfg.currency_symbol, totals.income),
        RESET
    );
}
