use crate::core::calculator::round2;
use crate::models::shift::Shift;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DayTotals {
    pub shifts: usize,
    pub hours_worked: f64,
    pub income: f64,
}

impl DayTotals {
    pub fn from_shifts<'a, I>(shifts: I) -> Self
    where
        I: IntoIterator<Item = &'a Shift>,
    {
        let mut totals = shifts
            .into_iter()
            .fold(DayTotals::default(), |mut acc, s| {
                acc.shifts += 1;
                acc.hours_worked += s.hours_worked;
                acc.income += s.income;
                acc
            });
        totals.hours_worked = round2(totals.hours_worked);
        totals.income = round2(totals.income);
        totals
    }
}
