//! In-process store with the same contract as the HTTP API.

use crate::errors::{AppError, AppResult};
use crate::models::{CanonicalDay, DayRecord};
use crate::store::DayStore;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

#[derive(Default)]
pub struct MemoryStore {
    records: RefCell<BTreeMap<CanonicalDay, DayRecord>>,
    requests: Cell<usize>,
    offline: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = DayRecord>) -> Self {
        let store = Self::new();
        store
            .records
            .borrow_mut()
            .extend(records.into_iter().map(|r| (r.date, r)));
        store
    }

    /// Snapshot of everything stored, in date order.
    pub fn all(&self) -> Vec<DayRecord> {
        self.records.borrow().values().copied().collect()
    }

    pub fn get(&self, date: CanonicalDay) -> Option<DayRecord> {
        self.records.borrow().get(&date).copied()
    }

    /// Number of calls received so far, failed ones included.
    pub fn request_count(&self) -> usize {
        self.requests.get()
    }

    /// Make every following call fail with a network error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    fn begin(&self) -> AppResult<()> {
        self.requests.set(self.requests.get() + 1);
        if self.offline.get() {
            return Err(AppError::Network("store unreachable".into()));
        }
        Ok(())
    }
}

impl DayStore for MemoryStore {
    fn fetch_range(&self, from: CanonicalDay, to: CanonicalDay) -> AppResult<Vec<DayRecord>> {
        self.begin()?;
        Ok(self
            .records
            .borrow()
            .range(from..=to)
            .map(|(_, r)| *r)
            .collect())
    }

    fn upsert(&self, record: &DayRecord) -> AppResult<()> {
        self.begin()?;
        self.records.borrow_mut().insert(record.date, *record);
        Ok(())
    }

    fn delete(&self, date: CanonicalDay) -> AppResult<()> {
        self.begin()?;
        self.records.borrow_mut().remove(&date);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> CanonicalDay {
        CanonicalDay::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn fetch_bounds_are_inclusive() {
        let store = MemoryStore::with_records([
            DayRecord::new(day(2024, 2, 29), 1.0, 0.0),
            DayRecord::new(day(2024, 3, 1), 2.0, 0.0),
            DayRecord::new(day(2024, 4, 30), 3.0, 0.0),
            DayRecord::new(day(2024, 5, 1), 4.0, 0.0),
        ]);
        let got = store.fetch_range(day(2024, 3, 1), day(2024, 4, 30)).unwrap();
        let hours: Vec<f64> = got.iter().map(|r| r.hours).collect();
        assert_eq!(hours, vec![2.0, 3.0]);
    }

    #[test]
    fn offline_store_counts_and_fails() {
        let store = MemoryStore::new();
        store.set_offline(true);
        assert!(matches!(
            store.delete(day(2024, 3, 1)),
            Err(AppError::Network(_))
        ));
        assert_eq!(store.request_count(), 1);
    }
}
