use crate::cli::parser::Commands;
use crate::cli::session::{Session, resolve_month};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_amount;
use crate::utils::date::weekday_str;
use crate::utils::formatting::separator;
use crate::utils::fmt_amount;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let mut session = Session::open(cfg)?;
        let first = resolve_month(month, &session.tz())?;
        session.show_month(first)?;

        let Some(range) = session.cache.range() else {
            return Ok(());
        };
        header(format!("Records {} → {}", range.start, range.end));

        if session.cache.is_empty() {
            info(format!("No records between {} and {}", range.start, range.end));
            return Ok(());
        }

        let dec = session.cfg.decimals;
        let tz = *session.cache.tz();
        let mut table = Table::new(vec![
            Column::left("Date", 10),
            Column::left("Day", 3),
            Column::right("Hours", 9),
            Column::right("Miles", 9),
        ]);

        let (mut total_h, mut total_m) = (0.0, 0.0);
        for r in session.cache.records() {
            let d = tz.display_date(r.date);
            table.add_row(vec![
                d.to_string(),
                weekday_str(d),
                colorize_amount(&fmt_amount(r.hours, dec)),
                colorize_amount(&fmt_amount(r.miles, dec)),
            ]);
            total_h += r.hours;
            total_m += r.miles;
        }

        print!("{}", table.render());
        println!("{}", separator(&session.cfg.separator_char, 35));
        println!(
            "{:<14} {:>9} {:>9}",
            format!("Total ({})", session.cache.len()),
            fmt_amount(total_h, dec),
            fmt_amount(total_m, dec)
        );
    }
    Ok(())
}
