/// Round to 2 decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn income_for(hours_worked: f64, rate: f64) -> f64 {
    round2(hours_worked * rate)
}
