//! Day identities.
//!
//! A calendar day has two numeric representations that must never be mixed:
//! the canonical UTC-midnight timestamp used as the store key, and the local
//! midnight timestamp used for display in the viewer's timezone.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Unix seconds of 00:00:00 UTC of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct CanonicalDay(NaiveDate);

impl CanonicalDay {
    /// Build from raw seconds; fails unless the value sits exactly on UTC midnight.
    pub fn from_secs(secs: i64) -> AppResult<Self> {
        if secs.rem_euclid(SECONDS_PER_DAY) != 0 {
            return Err(AppError::MisalignedDate(secs));
        }
        DateTime::from_timestamp(secs, 0)
            .map(|dt| CanonicalDay(dt.date_naive()))
            .ok_or(AppError::MisalignedDate(secs))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        CanonicalDay(date)
    }

    pub fn secs(self) -> i64 {
        self.0.and_time(NaiveTime::MIN).and_utc().timestamp()
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<i64> for CanonicalDay {
    type Error = AppError;

    fn try_from(secs: i64) -> AppResult<Self> {
        CanonicalDay::from_secs(secs)
    }
}

impl From<CanonicalDay> for i64 {
    fn from(day: CanonicalDay) -> i64 {
        day.secs()
    }
}

impl fmt::Display for CanonicalDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Unix seconds of local midnight in the viewer's timezone. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalMidnight(pub i64);

impl LocalMidnight {
    pub fn secs(self) -> i64 {
        self.0
    }
}
