//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Remote store
    // ---------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid UTC offset: {0} (expected +HH:MM or -HH:MM)")]
    InvalidOffset(String),

    #[error("Timestamp {0} is not aligned to UTC midnight")]
    MisalignedDate(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            AppError::Server {
                status: status.as_u16(),
                body: e.to_string(),
            }
        } else if e.is_decode() {
            AppError::MalformedResponse(e.to_string())
        } else {
            AppError::Network(e.to_string())
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
