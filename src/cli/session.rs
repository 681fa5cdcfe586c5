//! Per-invocation state: configuration, store client and visible-range cache.

use crate::config::Config;
use crate::core::form::DayForm;
use crate::core::range::{RangeCache, YearMonth};
use crate::core::tz::TzTranslator;
use crate::errors::AppResult;
use crate::store::HttpStore;
use crate::utils::date;
use chrono::NaiveDate;
use tracing::debug;

pub struct Session {
    pub cfg: Config,
    pub store: HttpStore,
    pub cache: RangeCache,
}

impl Session {
    /// Resolve the viewer offset once and connect the store.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let tz = TzTranslator::resolve(cfg.utc_offset.as_deref())?;
        let store = HttpStore::new(&cfg.api_url, cfg.timeout())?;
        debug!(api = %store.base_url(), shift = tz.shift_secs(), "session opened");

        Ok(Self {
            cfg: cfg.clone(),
            store,
            cache: RangeCache::new(tz),
        })
    }

    pub fn tz(&self) -> TzTranslator {
        *self.cache.tz()
    }

    /// Day argument (`YYYY-MM-DD` or `today`) in the session offset.
    pub fn parse_day(&self, s: &str) -> AppResult<NaiveDate> {
        date::parse_day_arg(s, self.cache.tz())
    }

    pub fn show_month(&mut self, month: YearMonth) -> AppResult<()> {
        self.cache.set_visible_month(month, &self.store)?;
        Ok(())
    }

    /// Load the window holding `date` and return a form with it selected.
    pub fn form_for(&mut self, date: NaiveDate) -> AppResult<DayForm> {
        self.show_month(YearMonth::of(date))?;
        let mut form = DayForm::new(self.cfg.decimals);
        form.select(Some(date), &self.cache)?;
        Ok(form)
    }
}

/// `--month` argument, defaulting to the viewer's current month.
pub fn resolve_month(month: &Option<String>, tz: &TzTranslator) -> AppResult<YearMonth> {
    match month {
        Some(m) => m.parse(),
        None => Ok(YearMonth::current(tz)),
    }
}
