use crate::errors::AppResult;
use crate::export::model::{RecordExport, get_headers};
use csv::Writer;
use std::path::Path;

/// Write the rows as CSV, header first.
pub fn write_csv(path: &Path, rows: &[RecordExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for r in rows {
        wtr.write_record(&[
            r.date.clone(),
            r.timestamp.to_string(),
            r.hours.to_string(),
            r.miles.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
