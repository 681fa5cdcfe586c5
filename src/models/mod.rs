pub mod day;
pub mod record;

pub use day::{CanonicalDay, LocalMidnight, SECONDS_PER_DAY};
pub use record::DayRecord;
