//! Text calendar for the visible two-month window.
//!
//! Each day cell is five columns wide: `[dd*]` where the brackets mark the
//! selected day and the marker (plain mode) or the color (ANSI mode) shows the
//! most specific classification of the day.

use crate::core::classify::Classification;
use crate::core::range::{VisibleRange, YearMonth};
use crate::utils::colors::{RESET, REVERSE, color_for_style, marker_for_style};
use chrono::{Datelike, NaiveDate};

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
const CELL: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub selected: Option<NaiveDate>,
    pub plain: bool,
}

fn cell(date: NaiveDate, classes: &Classification, opts: &RenderOptions) -> String {
    let style = classes.style_for(date);
    let (open, close) = if opts.selected == Some(date) {
        ('[', ']')
    } else {
        (' ', ' ')
    };

    if opts.plain || style.is_none() {
        let marker = if opts.plain {
            marker_for_style(style)
        } else {
            ' '
        };
        format!("{open}{:>2}{marker}{close}", date.day())
    } else {
        format!(
            "{open}{}{REVERSE}{:>2}{RESET} {close}",
            color_for_style(style),
            date.day()
        )
    }
}

pub fn render_month(month: YearMonth, classes: &Classification, opts: &RenderOptions) -> String {
    let first = month.first_day();
    let mut out = String::new();

    out.push_str(&first.format("%B %Y").to_string());
    out.push('\n');
    for wd in WEEKDAYS {
        out.push_str(&format!(" {:<width$}", wd, width = CELL - 1));
    }
    out.push('\n');

    let lead = first.weekday().num_days_from_monday() as usize;
    out.push_str(&" ".repeat(lead * CELL));

    let mut col = lead;
    for date in first.iter_days().take_while(|d| d.month() == month.month) {
        out.push_str(&cell(date, classes, opts));
        col += 1;
        if col == 7 {
            out.push('\n');
            col = 0;
        }
    }
    if col != 0 {
        out.push('\n');
    }
    out
}

pub fn legend(plain: bool) -> String {
    if plain {
        "h = hours   m = miles   * = hours and miles   [ ] = selected".to_string()
    } else {
        use crate::core::classify::DayStyle;
        let sample = |s: DayStyle, label: &str| {
            format!("{}{REVERSE} {label} {RESET}", color_for_style(Some(s)))
        };
        format!(
            "{}  {}  {}   [ ] = selected",
            sample(DayStyle::Hours, "hours"),
            sample(DayStyle::Miles, "miles"),
            sample(DayStyle::Both, "both")
        )
    }
}

/// Both months of the window, one after the other, followed by the legend.
pub fn render_range(range: &VisibleRange, classes: &Classification, opts: &RenderOptions) -> String {
    let mut out = String::new();
    for month in range.months() {
        out.push_str(&render_month(month, classes, opts));
        out.push('\n');
    }
    out.push_str(&legend(opts.plain));
    out.push('\n');
    out
}
