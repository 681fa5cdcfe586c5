use crate::core::tz::TzTranslator;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Like [`parse_date`], also accepting `today` in the session offset.
pub fn parse_day_arg(s: &str, tz: &TzTranslator) -> AppResult<NaiveDate> {
    if s.trim().eq_ignore_ascii_case("today") {
        return Ok(tz.today());
    }
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn weekday_str(d: NaiveDate) -> String {
    d.format("%a").to_string()
}
