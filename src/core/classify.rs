//! Per-day classification used for calendar styling.
//!
//! The three sets overlap: a day with hours and miles sits in all of them.
//! Rendering picks the most specific style through [`Classification::style_for`].

use crate::core::range::RangeCache;
use crate::core::tz::TzTranslator;
use crate::models::DayRecord;
use chrono::NaiveDate;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStyle {
    Hours,
    Miles,
    Both,
}

#[derive(Debug, Default, Clone)]
pub struct Classification {
    /// hours > 0, whatever the miles
    pub with_hours: BTreeSet<NaiveDate>,
    /// miles > 0, whatever the hours
    pub with_miles: BTreeSet<NaiveDate>,
    /// hours > 0 and miles > 0
    pub with_both: BTreeSet<NaiveDate>,
}

impl Classification {
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a DayRecord>,
        tz: &TzTranslator,
    ) -> Self {
        let mut out = Self::default();
        for r in records {
            let date = tz.display_date(r.date);
            if r.has_hours() {
                out.with_hours.insert(date);
            }
            if r.has_miles() {
                out.with_miles.insert(date);
            }
            if r.has_hours() && r.has_miles() {
                out.with_both.insert(date);
            }
        }
        out
    }

    pub fn from_cache(cache: &RangeCache) -> Self {
        Self::from_records(cache.records(), cache.tz())
    }

    pub fn style_for(&self, date: NaiveDate) -> Option<DayStyle> {
        if self.with_both.contains(&date) {
            Some(DayStyle::Both)
        } else if self.with_hours.contains(&date) {
            Some(DayStyle::Hours)
        } else if self.with_miles.contains(&date) {
            Some(DayStyle::Miles)
        } else {
            None
        }
    }
}
