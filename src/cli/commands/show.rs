use crate::calendar::{RenderOptions, render_range};
use crate::cli::parser::Commands;
use crate::cli::session::{Session, resolve_month};
use crate::config::Config;
use crate::core::classify::Classification;
use crate::core::form::{DayForm, FormState};
use crate::core::range::YearMonth;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colors_enabled;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        month,
        select,
        plain,
    } = cmd
    {
        let mut session = Session::open(cfg)?;
        let tz = session.tz();

        let selected = select
            .as_deref()
            .map(|s| session.parse_day(s))
            .transpose()?;
        let first = match (month, selected) {
            (None, Some(d)) => YearMonth::of(d),
            _ => resolve_month(month, &tz)?,
        };

        session.show_month(first)?;

        let Some(range) = session.cache.range() else {
            return Ok(());
        };
        header(format!(
            "{} → {}",
            range.start.format("%B %Y"),
            range.end.format("%B %Y")
        ));

        let classes = Classification::from_cache(&session.cache);
        let opts = RenderOptions {
            selected,
            plain: *plain || !colors_enabled(),
        };
        print!("{}", render_range(&range, &classes, &opts));

        if let Some(d) = selected {
            if !range.contains(d) {
                info(format!("{} is outside the displayed months.", d));
                return Ok(());
            }
            let mut form = DayForm::new(session.cfg.decimals);
            form.select(Some(d), &session.cache)?;
            println!();
            match form.state() {
                FormState::SelectedWithRecord(_) => println!(
                    "{}  hours: {}  miles: {}",
                    d,
                    form.hours_text(),
                    form.miles_text()
                ),
                _ => println!("{}  no hours or miles logged", d),
            }
        }
    }
    Ok(())
}
