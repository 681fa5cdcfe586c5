// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::csv::write_csv;
use crate::export::json::write_json;
use crate::export::model::RecordExport;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::DayRecord;
use crate::ui::messages::warning;
use crate::ui::prompt::ask_confirmation;
use std::path::Path;
use tracing::debug;

/// Refuse to clobber an existing file unless forced or confirmed.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }
    let prompt = format!("File {} already exists. Overwrite?", path.display());
    if ask_confirmation(&prompt) {
        Ok(())
    } else {
        Err(AppError::Export("existing file not overwritten".into()))
    }
}

/// High-level export of cached day records.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` to `file` in `format`. Returns the number of rows written.
    pub fn export<'a>(
        records: impl IntoIterator<Item = &'a DayRecord>,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        if file.trim().is_empty() {
            return Err(AppError::Export("output file path is empty".into()));
        }

        ensure_writable(path, force)?;

        let rows: Vec<RecordExport> = records.into_iter().map(RecordExport::from).collect();
        if rows.is_empty() {
            warning("No records in the selected range; writing an empty export.");
        }
        debug!(rows = rows.len(), format = format.as_str(), path = %path.display(), "exporting");

        match format {
            ExportFormat::Csv => {
                write_csv(path, &rows)?;
                notify_export_success("CSV", path);
            }
            ExportFormat::Json => {
                write_json(path, &rows)?;
                notify_export_success("JSON", path);
            }
        }

        Ok(rows.len())
    }
}
