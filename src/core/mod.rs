pub mod classify;
pub mod form;
pub mod range;
pub mod tz;

pub use classify::{Classification, DayStyle};
pub use form::{DayForm, FormState, SubmitOutcome};
pub use range::{Applied, FetchTicket, RangeCache, VisibleRange, YearMonth};
pub use tz::TzTranslator;
