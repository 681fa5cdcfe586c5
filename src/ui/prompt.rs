//! Reading answers from the terminal.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Ask a yes/no confirmation from the user
pub fn ask_confirmation(prompt: &str) -> bool {
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

/// Prompt for one line; `None` on end of input.
pub fn prompt_line(input: &mut impl BufRead, prompt: &str) -> AppResult<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s.trim().to_string()))
}
