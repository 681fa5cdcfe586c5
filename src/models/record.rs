use crate::errors::{AppError, AppResult};
use crate::models::day::CanonicalDay;
use serde::{Deserialize, Serialize};

/// Hours and miles logged for one canonical day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: CanonicalDay,
    pub hours: f64,
    pub miles: f64,
}

impl DayRecord {
    pub fn new(date: CanonicalDay, hours: f64, miles: f64) -> Self {
        Self { date, hours, miles }
    }

    /// Zero hours and zero miles is the same as having no record at all.
    pub fn is_empty(&self) -> bool {
        self.hours == 0.0 && self.miles == 0.0
    }

    pub fn has_hours(&self) -> bool {
        self.hours > 0.0
    }

    pub fn has_miles(&self) -> bool {
        self.miles > 0.0
    }

    /// Reject values a store must never hold.
    pub fn validate(&self) -> AppResult<()> {
        for (name, value) in [("hours", self.hours), ("miles", self.miles)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::MalformedResponse(format!(
                    "{} for {} must be a non-negative number, got {}",
                    name, self.date, value
                )));
            }
        }
        Ok(())
    }
}
