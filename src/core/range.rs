//! Visible-range cache.
//!
//! Holds the records of the two calendar months on screen. Every fetch replaces
//! the cached records wholesale; results of superseded fetches are dropped.

use crate::core::tz::TzTranslator;
use crate::errors::{AppError, AppResult};
use crate::models::{CanonicalDay, DayRecord};
use crate::store::DayStore;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A calendar month, `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(AppError::InvalidMonth(format!("{:04}-{:02}", year, month)));
        }
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Month holding the viewer's today.
    pub fn current(tz: &TzTranslator) -> Self {
        Self::of(tz.today())
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

}

impl FromStr for YearMonth {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        Self::new(d.year(), d.month())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Span of local display dates currently rendered: one month plus the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl VisibleRange {
    pub fn for_month(month: YearMonth) -> Self {
        Self {
            start: month.first_day(),
            end: month.next().last_day(),
        }
    }

    pub fn first_month(&self) -> YearMonth {
        YearMonth::of(self.start)
    }

    pub fn months(&self) -> [YearMonth; 2] {
        let first = self.first_month();
        [first, first.next()]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn canonical_bounds(&self, tz: &TzTranslator) -> AppResult<(CanonicalDay, CanonicalDay)> {
        let from = tz.to_canonical(tz.local_midnight_of(self.start))?;
        let to = tz.to_canonical(tz.local_midnight_of(self.end))?;
        Ok((from, to))
    }
}

/// Tag of one issued range fetch. Only the latest ticket may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub from: CanonicalDay,
    pub to: CanonicalDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Records replaced; holds the new record count.
    Replaced(usize),
    /// A newer fetch was issued meanwhile; result dropped.
    Stale,
}

pub struct RangeCache {
    tz: TzTranslator,
    range: Option<VisibleRange>,
    records: BTreeMap<CanonicalDay, DayRecord>,
    issued: u64,
}

impl RangeCache {
    pub fn new(tz: TzTranslator) -> Self {
        Self {
            tz,
            range: None,
            records: BTreeMap::new(),
            issued: 0,
        }
    }

    pub fn tz(&self) -> &TzTranslator {
        &self.tz
    }

    pub fn range(&self) -> Option<VisibleRange> {
        self.range
    }

    /// Show `month` and the following one, then fetch that window.
    pub fn set_visible_month<S: DayStore + ?Sized>(
        &mut self,
        month: YearMonth,
        store: &S,
    ) -> AppResult<Applied> {
        let ticket = self.begin_month(month)?;
        self.run(ticket, store)
    }

    /// Re-fetch the current window, replacing every cached record.
    pub fn refresh<S: DayStore + ?Sized>(&mut self, store: &S) -> AppResult<Applied> {
        let ticket = self.begin_refresh()?;
        self.run(ticket, store)
    }

    /// Update the range bounds and issue a ticket for them. The range is set
    /// before the ticket exists so the fetch always matches what is rendered.
    pub fn begin_month(&mut self, month: YearMonth) -> AppResult<FetchTicket> {
        let range = VisibleRange::for_month(month);
        range.canonical_bounds(&self.tz)?;
        self.range = Some(range);
        self.begin_refresh()
    }

    /// Issue a ticket for the current range. Every older ticket becomes stale.
    pub fn begin_refresh(&mut self) -> AppResult<FetchTicket> {
        let range = self
            .range
            .ok_or_else(|| AppError::Validation("no month is displayed".into()))?;
        let (from, to) = range.canonical_bounds(&self.tz)?;

        self.issued += 1;
        debug!(seq = self.issued, from = from.secs(), to = to.secs(), "issued range fetch");
        Ok(FetchTicket {
            seq: self.issued,
            from,
            to,
        })
    }

    /// Apply the result of `ticket`'s fetch, unless a newer fetch was issued.
    pub fn complete(&mut self, ticket: &FetchTicket, records: Vec<DayRecord>) -> Applied {
        if ticket.seq != self.issued {
            debug!(
                seq = ticket.seq,
                latest = self.issued,
                "dropping result of superseded fetch"
            );
            return Applied::Stale;
        }

        self.records = records
            .into_iter()
            .filter(|r| !r.is_empty() && ticket.from <= r.date && r.date <= ticket.to)
            .map(|r| (r.date, r))
            .collect();
        Applied::Replaced(self.records.len())
    }

    fn run<S: DayStore + ?Sized>(&mut self, ticket: FetchTicket, store: &S) -> AppResult<Applied> {
        let records = store.fetch_range(ticket.from, ticket.to)?;
        Ok(self.complete(&ticket, records))
    }

    pub fn record_for(&self, day: CanonicalDay) -> Option<&DayRecord> {
        self.records.get(&day)
    }

    pub fn records(&self) -> impl Iterator<Item = &DayRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
