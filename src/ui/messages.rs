use crate::errors::AppError;
use crate::utils::colors::colors_enabled;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn paint(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    if colors_enabled() {
        format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
    } else {
        format!("{} {}", icon, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", paint(FG_BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", paint(FG_GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", paint(FG_YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", paint(FG_RED, ICON_ERR, msg));
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    if colors_enabled() {
        println!("{}{}=== {} ==={}", FG_BLUE, BOLD, msg, RESET);
    } else {
        println!("=== {} ===", msg);
    }
}

/// Error notice plus a hint on what the user can do next.
pub fn report(err: &AppError) {
    error(err);
    let hint = match err {
        AppError::Network(_) => Some("The API could not be reached; nothing was changed. Retry when it is back."),
        AppError::Server { .. } | AppError::MalformedResponse(_) => {
            Some("The API rejected the request; the displayed records were left unchanged.")
        }
        AppError::Validation(_) => Some("Hours and miles must both be numbers (use 0 to leave one empty)."),
        AppError::Config(_) | AppError::Yaml(_) => {
            Some("Check the configuration with `rmileage config --check`.")
        }
        _ => None,
    };
    if let Some(h) = hint {
        eprintln!("   {}", h);
    }
}
