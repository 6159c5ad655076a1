//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `£100.80`, `-£3.15`
pub fn format_money(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// A horizontal rule made of `ch` (first char only, `-` if empty).
pub fn separator(ch: &str, width: usize) -> String {
    let c = ch.chars().next().unwrap_or('-');
    std::iter::repeat_n(c, width).collect()
}
