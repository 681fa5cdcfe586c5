//! HTTP client for the day-record API.
//!
//! GET    /?from=<secs>&to=<secs>  -> [{date, hours, miles}, ...]
//! POST   /  {date, hours, miles}  -> upsert
//! DELETE /?date=<secs>            -> delete

use crate::errors::{AppError, AppResult};
use crate::models::{CanonicalDay, DayRecord};
use crate::store::DayStore;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use tracing::debug;

pub struct HttpStore {
    base: Url,
    client: Client,
}

impl HttpStore {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("invalid api_url '{}': {}", base_url, e)))?;

        let mut builder = Client::builder().timeout(timeout);
        if matches!(
            base.host_str(),
            Some("localhost") | Some("127.0.0.1") | Some("[::1]")
        ) {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(Self { base, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }
}

/// Turn a non-2xx response into `AppError::Server`, keeping the body for the notice.
fn check_status(resp: Response) -> AppResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    Err(AppError::Server {
        status: status.as_u16(),
        body: body.trim().to_string(),
    })
}

fn decode_records(text: &str) -> AppResult<Vec<DayRecord>> {
    let records: Vec<DayRecord> =
        serde_json::from_str(text).map_err(|e| AppError::MalformedResponse(e.to_string()))?;
    for r in &records {
        r.validate()?;
    }
    Ok(records)
}

impl DayStore for HttpStore {
    fn fetch_range(&self, from: CanonicalDay, to: CanonicalDay) -> AppResult<Vec<DayRecord>> {
        debug!(from = from.secs(), to = to.secs(), "GET day records");

        let resp = self
            .client
            .get(self.base.clone())
            .query(&[("from", from.secs()), ("to", to.secs())])
            .send()?;
        let text = check_status(resp)?.text()?;
        let records = decode_records(&text)?;

        debug!(count = records.len(), "fetched day records");
        Ok(records)
    }

    fn upsert(&self, record: &DayRecord) -> AppResult<()> {
        debug!(
            date = record.date.secs(),
            hours = record.hours,
            miles = record.miles,
            "POST day record"
        );

        let resp = self.client.post(self.base.clone()).json(record).send()?;
        check_status(resp)?;
        Ok(())
    }

    fn delete(&self, date: CanonicalDay) -> AppResult<()> {
        debug!(date = date.secs(), "DELETE day record");

        let resp = self
            .client
            .delete(self.base.clone())
            .query(&[("date", date.secs())])
            .send()?;
        check_status(resp)?;
        Ok(())
    }
}
