pub mod day_totals;
pub mod shift;
