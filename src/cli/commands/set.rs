use crate::cli::parser::Commands;
use crate::cli::session::Session;
use crate::config::Config;
use crate::core::form::{DayForm, SubmitOutcome, parse_amounts};
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Log hours and miles for a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { date, hours, miles } = cmd {
        // Validate before touching the network.
        parse_amounts(hours, miles)?;

        let mut session = Session::open(cfg)?;
        let d = session.parse_day(date)?;
        let mut form = session.form_for(d)?;
        form.set_hours(hours.as_str());
        form.set_miles(miles.as_str());

        let outcome = form.submit(&session.store, &mut session.cache)?;
        report_outcome(&outcome, &form);
    }
    Ok(())
}

pub(crate) fn report_outcome(outcome: &SubmitOutcome, form: &DayForm) {
    match outcome {
        SubmitOutcome::Upserted(rec) => success(format!(
            "Saved {}: {} h, {} mi",
            rec.date,
            form.hours_text(),
            form.miles_text()
        )),
        SubmitOutcome::Deleted(day) => success(format!("Removed the record for {}", day)),
    }
}
