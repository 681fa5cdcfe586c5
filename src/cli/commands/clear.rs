use crate::cli::commands::set::report_outcome;
use crate::cli::parser::Commands;
use crate::cli::session::Session;
use crate::config::Config;
use crate::core::form::FormState;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::prompt::ask_confirmation;

/// Remove a day by submitting zero hours and zero miles.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { date: date_str, yes } = cmd {
        let mut session = Session::open(cfg)?;
        let d = session.parse_day(date_str)?;
        let mut form = session.form_for(d)?;

        if !matches!(form.state(), FormState::SelectedWithRecord(_)) {
            info(format!("Nothing logged for {}; nothing to clear.", d));
            return Ok(());
        }

        let prompt = format!(
            "Remove {} h and {} mi logged for {}?",
            form.hours_text(),
            form.miles_text(),
            d
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        form.set_hours("0");
        form.set_miles("0");
        let outcome = form.submit(&session.store, &mut session.cache)?;
        report_outcome(&outcome, &form);
    }
    Ok(())
}
