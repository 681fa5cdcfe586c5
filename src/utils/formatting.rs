//! Formatting utilities used for CLI and export outputs.

/// Hours or miles with a fixed number of decimals, e.g. `8.00`.
pub fn fmt_amount(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Separator line of `len` repetitions of the configured char.
pub fn separator(ch: &str, len: usize) -> String {
    let c = ch.chars().next().unwrap_or('-');
    std::iter::repeat_n(c, len).collect()
}
