//! Timezone-identity translator.
//!
//! The viewer's offset is captured once per session and injected here; every
//! conversion in a session goes through the same translator.

use crate::errors::{AppError, AppResult};
use crate::models::{CanonicalDay, LocalMidnight};
use chrono::{FixedOffset, Local, NaiveDate, Offset, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TzTranslator {
    /// Seconds to add going canonical -> local, to subtract going local -> canonical.
    shift: i64,
}

impl TzTranslator {
    pub fn new(offset: FixedOffset) -> Self {
        Self {
            shift: -i64::from(offset.local_minus_utc()),
        }
    }

    pub fn utc() -> Self {
        Self { shift: 0 }
    }

    /// Offset of the machine's current timezone, read once.
    pub fn from_system() -> Self {
        Self::new(Local::now().offset().fix())
    }

    /// Explicit override (config or `--utc-offset`) wins over the system zone.
    pub fn resolve(override_offset: Option<&str>) -> AppResult<Self> {
        match override_offset {
            Some(s) => Ok(Self::new(parse_offset(s)?)),
            None => Ok(Self::from_system()),
        }
    }

    pub fn shift_secs(&self) -> i64 {
        self.shift
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        i32::try_from(-self.shift)
            .ok()
            .and_then(FixedOffset::east_opt)
    }

    pub fn to_canonical(&self, local: LocalMidnight) -> AppResult<CanonicalDay> {
        CanonicalDay::from_secs(local.secs() - self.shift)
    }

    pub fn to_local(&self, canonical: CanonicalDay) -> LocalMidnight {
        LocalMidnight(canonical.secs() + self.shift)
    }

    pub fn local_midnight_of(&self, date: NaiveDate) -> LocalMidnight {
        self.to_local(CanonicalDay::from_date(date))
    }

    /// Current calendar day as seen by the viewer, in the session offset.
    pub fn today(&self) -> NaiveDate {
        let now = Utc::now();
        match self.offset() {
            Some(off) => now.with_timezone(&off).date_naive(),
            None => now.date_naive(),
        }
    }

    /// Canonical identity of a day the user picked on the calendar.
    pub fn canonical_of(&self, date: NaiveDate) -> AppResult<CanonicalDay> {
        self.to_canonical(self.local_midnight_of(date))
    }

    /// Calendar cell a canonical day is drawn in. The local date of
    /// `to_local(c)` is the same calendar day as `c`.
    pub fn display_date(&self, canonical: CanonicalDay) -> NaiveDate {
        canonical.date()
    }
}

/// Parse `+HH:MM`, `-HH:MM`, `+HHMM`, `Z` or `UTC`.
pub fn parse_offset(s: &str) -> AppResult<FixedOffset> {
    let t = s.trim();
    if t.eq_ignore_ascii_case("z") || t.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| AppError::InvalidOffset(s.into()));
    }

    let (sign, rest) = match t.as_bytes().first() {
        Some(b'+') => (1, &t[1..]),
        Some(b'-') => (-1, &t[1..]),
        _ => return Err(AppError::InvalidOffset(s.into())),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidOffset(s.into()));
    }

    let hours: i32 = digits[..2]
        .parse()
        .map_err(|_| AppError::InvalidOffset(s.into()))?;
    let minutes: i32 = digits[2..]
        .parse()
        .map_err(|_| AppError::InvalidOffset(s.into()))?;
    if hours > 14 || minutes > 59 {
        return Err(AppError::InvalidOffset(s.into()));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| AppError::InvalidOffset(s.into()))
}
