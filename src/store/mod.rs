//! Remote day-record store.
//!
//! The synchronizer only depends on the three calls of [`DayStore`]; the HTTP
//! client talks to the real API, the memory store backs tests.

pub mod http;
pub mod memory;

pub use http::HttpStore;
pub use memory::MemoryStore;

use crate::errors::AppResult;
use crate::models::{CanonicalDay, DayRecord};

pub trait DayStore {
    /// All records whose canonical date lies in `[from, to]`, bounds inclusive.
    fn fetch_range(&self, from: CanonicalDay, to: CanonicalDay) -> AppResult<Vec<DayRecord>>;

    /// Create or replace the record for `record.date`.
    fn upsert(&self, record: &DayRecord) -> AppResult<()>;

    /// Remove the record for `date`, if any.
    fn delete(&self, date: CanonicalDay) -> AppResult<()>;
}
