//! Error handling for BPLAN processing operations.
//!
//! Provides typed errors for structural violations, field conversion
//! failures, and footer integrity mismatches. Every variant is fatal to the
//! current file's run; the CLI boundary catches them per file.

use thiserror::Error;

use crate::schema::RecordType;

#[derive(Error, Debug)]
pub enum BplanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown record type: '{tag}'")]
    UnknownRecordType { tag: String },

    #[error("Unsupported action code '{action}' on {record_type} group (only 'A' is supported)")]
    UnsupportedAction {
        record_type: RecordType,
        action: String,
    },

    #[error("Invalid date '{value}' in field '{field}'")]
    DateParse { field: String, value: String },

    #[error("No PIF header record found before the first data group")]
    MissingHeader,

    #[error("More than one PIF header group in extract")]
    MultipleHeader,

    #[error("Unexpected {tag} group after the PIT footer")]
    TrailingData { tag: String },

    #[error("Inconsistent {record_type} counts: footer expected {expected}, inserted {actual}")]
    CountMismatch {
        record_type: RecordType,
        expected: i64,
        actual: i64,
    },

    #[error("Footer declares unsupported update/delete records for {record_type}")]
    UnsupportedUpdate { record_type: RecordType },

    #[error("Invalid extract format: {message}")]
    InvalidFormat { message: String },
}

impl BplanError {
    /// Create a format error with context
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an unknown record type error
    pub fn unknown_record_type(tag: impl Into<String>) -> Self {
        Self::UnknownRecordType { tag: tag.into() }
    }
}

pub type Result<T> = std::result::Result<T, BplanError>;
