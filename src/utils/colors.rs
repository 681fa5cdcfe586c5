//! ANSI color helper utilities for terminal output.

use crate::core::classify::DayStyle;
use std::sync::OnceLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const REVERSE: &str = "\x1b[7m";

pub const GREEN: &str = "\x1b[32m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

/// False when NO_COLOR is set (https://no-color.org).
pub fn colors_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var_os("NO_COLOR").is_none())
}

/// Color of a calendar cell.
/// hours → blue, miles → green, both → magenta
pub fn color_for_style(style: Option<DayStyle>) -> &'static str {
    match style {
        Some(DayStyle::Hours) => BLUE,
        Some(DayStyle::Miles) => GREEN,
        Some(DayStyle::Both) => MAGENTA,
        None => RESET,
    }
}

/// One-char marker used when colors are disabled.
pub fn marker_for_style(style: Option<DayStyle>) -> char {
    match style {
        Some(DayStyle::Hours) => 'h',
        Some(DayStyle::Miles) => 'm',
        Some(DayStyle::Both) => '*',
        None => ' ',
    }
}

/// Grey out zero amounts ("0.00"), leave the rest untouched.
pub fn colorize_amount(value: &str) -> String {
    let zero = value.trim().parse::<f64>().map(|v| v == 0.0).unwrap_or(false);
    if zero && colors_enabled() {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
