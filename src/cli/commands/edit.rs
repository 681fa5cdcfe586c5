use crate::cli::commands::set::report_outcome;
use crate::cli::parser::Commands;
use crate::cli::session::Session;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, report};
use crate::ui::prompt::prompt_line;
use crate::utils::date;
use std::io;

/// Interactive edit: prefilled fields, empty input keeps the shown value.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { date: date_str } = cmd {
        let mut session = Session::open(cfg)?;
        let d = session.parse_day(date_str)?;
        let mut form = session.form_for(d)?;

        header(format!("{} ({})", d, date::weekday_str(d)));
        let stdin = io::stdin();
        let mut input = stdin.lock();

        loop {
            let shown_h = form.hours_text().to_string();
            let Some(h) = prompt_line(&mut input, &format!("Hours [{}]: ", shown_h))? else {
                info("Operation cancelled.");
                return Ok(());
            };
            let shown_m = form.miles_text().to_string();
            let Some(m) = prompt_line(&mut input, &format!("Miles [{}]: ", shown_m))? else {
                info("Operation cancelled.");
                return Ok(());
            };

            if !h.is_empty() {
                form.set_hours(h);
            }
            if !m.is_empty() {
                form.set_miles(m);
            }

            match form.validated() {
                Ok(_) => break,
                Err(e @ AppError::Validation(_)) => report(&e),
                Err(e) => return Err(e),
            }
        }

        let outcome = form.submit(&session.store, &mut session.cache)?;
        report_outcome(&outcome, &form);
    }
    Ok(())
}
