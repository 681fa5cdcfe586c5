//! Day-edit form controller.
//!
//! Binds the hours/miles text fields to the selected day. Fields mirror the
//! cached record of that day; submitting writes through the store and then
//! refreshes the cache before the fields are re-synced.

use crate::core::range::RangeCache;
use crate::errors::{AppError, AppResult};
use crate::models::{CanonicalDay, DayRecord};
use crate::store::DayStore;
use chrono::NaiveDate;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    NoSelection,
    SelectedWithRecord(DayRecord),
    SelectedWithoutRecord(CanonicalDay),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitOutcome {
    Upserted(DayRecord),
    Deleted(CanonicalDay),
}

#[derive(Debug, Clone)]
pub struct DayForm {
    selected: Option<NaiveDate>,
    state: FormState,
    hours_text: String,
    miles_text: String,
    decimals: usize,
}

impl DayForm {
    pub fn new(decimals: usize) -> Self {
        Self {
            selected: None,
            state: FormState::NoSelection,
            hours_text: String::new(),
            miles_text: String::new(),
            decimals,
        }
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn hours_text(&self) -> &str {
        &self.hours_text
    }

    pub fn miles_text(&self) -> &str {
        &self.miles_text
    }

    pub fn set_hours(&mut self, text: impl Into<String>) {
        self.hours_text = text.into();
    }

    pub fn set_miles(&mut self, text: impl Into<String>) {
        self.miles_text = text.into();
    }

    /// Select a day (or clear the selection) and load its fields from the cache.
    pub fn select(&mut self, date: Option<NaiveDate>, cache: &RangeCache) -> AppResult<()> {
        self.selected = date;
        self.sync(cache)
    }

    /// Re-evaluate the selected day against the cache and reset the fields.
    pub fn sync(&mut self, cache: &RangeCache) -> AppResult<()> {
        self.state = match self.selected {
            None => FormState::NoSelection,
            Some(date) => {
                let day = cache.tz().canonical_of(date)?;
                match cache.record_for(day) {
                    Some(rec) => FormState::SelectedWithRecord(*rec),
                    None => FormState::SelectedWithoutRecord(day),
                }
            }
        };

        match self.state {
            FormState::SelectedWithRecord(rec) => {
                self.hours_text = format!("{:.*}", self.decimals, rec.hours);
                self.miles_text = format!("{:.*}", self.decimals, rec.miles);
            }
            FormState::SelectedWithoutRecord(_) | FormState::NoSelection => {
                self.hours_text.clear();
                self.miles_text.clear();
            }
        }
        Ok(())
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        self.validated().is_ok()
    }

    /// Canonical day and parsed values, or the reason submission is disabled.
    pub fn validated(&self) -> AppResult<(CanonicalDay, f64, f64)> {
        let day = match self.state {
            FormState::NoSelection => {
                return Err(AppError::Validation("no day selected".into()));
            }
            FormState::SelectedWithRecord(rec) => rec.date,
            FormState::SelectedWithoutRecord(day) => day,
        };
        let (hours, miles) = parse_amounts(&self.hours_text, &self.miles_text)?;
        Ok((day, hours, miles))
    }

    /// Write the fields to the store, then refresh the cache and re-sync.
    /// Zero hours and zero miles deletes the day instead of storing zeros.
    pub fn submit<S: DayStore + ?Sized>(
        &mut self,
        store: &S,
        cache: &mut RangeCache,
    ) -> AppResult<SubmitOutcome> {
        let (day, hours, miles) = self.validated()?;

        let outcome = if hours == 0.0 && miles == 0.0 {
            store.delete(day)?;
            info!(date = %day, "deleted day record");
            SubmitOutcome::Deleted(day)
        } else {
            let record = DayRecord::new(day, hours, miles);
            store.upsert(&record)?;
            info!(date = %day, hours, miles, "stored day record");
            SubmitOutcome::Upserted(record)
        };

        cache.refresh(store)?;
        self.sync(cache)?;
        Ok(outcome)
    }
}

/// Parse both field texts; empty, non-numeric or negative input is rejected.
pub fn parse_amounts(hours: &str, miles: &str) -> AppResult<(f64, f64)> {
    Ok((parse_field("hours", hours)?, parse_field("miles", miles)?))
}

fn parse_field(name: &str, text: &str) -> AppResult<f64> {
    let t = text.trim();
    if t.is_empty() {
        return Err(AppError::Validation(format!("{} is required", name)));
    }
    let value: f64 = t
        .parse()
        .map_err(|_| AppError::Validation(format!("{} must be a number, got '{}'", name, t)))?;
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::Validation(format!(
            "{} must be zero or positive, got '{}'",
            name, t
        )));
    }
    Ok(value)
}
