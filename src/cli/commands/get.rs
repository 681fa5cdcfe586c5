use crate::cli::parser::Commands;
use crate::cli::session::Session;
use crate::config::Config;
use crate::core::form::FormState;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Get { date: date_str } = cmd {
        let mut session = Session::open(cfg)?;
        let d = session.parse_day(date_str)?;
        let form = session.form_for(d)?;

        match form.state() {
            FormState::SelectedWithRecord(rec) => {
                println!("Date  : {} ({})", d, date::weekday_str(d));
                println!("Key   : {}", rec.date.secs());
                println!("Hours : {}", form.hours_text());
                println!("Miles : {}", form.miles_text());
            }
            _ => info(format!("No hours or miles logged for {}", d)),
        }
    }
    Ok(())
}
