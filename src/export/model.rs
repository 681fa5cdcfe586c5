// src/export/model.rs

use crate::models::DayRecord;
use serde::Serialize;

/// Flat row written by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub date: String,
    pub timestamp: i64,
    pub hours: f64,
    pub miles: f64,
}

impl From<&DayRecord> for RecordExport {
    fn from(r: &DayRecord) -> Self {
        Self {
            date: r.date.to_string(),
            timestamp: r.date.secs(),
            hours: r.hours,
            miles: r.miles,
        }
    }
}

pub(crate) fn get_headers() -> [&'static str; 4] {
    ["date", "timestamp", "hours", "miles"]
}
