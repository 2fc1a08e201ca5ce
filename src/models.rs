//! Core data models for BPLAN processing
//!
//! Raw rows as decoded from the extract, typed field values bound for the
//! store, the header metadata record, and the per-run load summary.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rusqlite::ToSql;
use rusqlite::types::{ToSqlOutput, Value, ValueRef};

use crate::constants::SQL_DATE_FORMAT;
use crate::error::{BplanError, Result};
use crate::schema::RecordType;

/// One input line as decoded text columns
///
/// Column 0 is the 3-letter record tag; column 1 is the single-letter
/// action code (for data rows) or the first payload column (PIF and PIT
/// rows, which carry no action code).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    columns: Vec<String>,
}

impl RawRow {
    /// Wrap decoded columns; rows must carry at least a tag and one more
    /// column to be groupable
    pub fn new(columns: Vec<String>) -> Result<Self> {
        if columns.len() < 2 {
            return Err(BplanError::invalid_format(format!(
                "record line has {} column(s), at least 2 required",
                columns.len()
            )));
        }
        Ok(Self { columns })
    }

    /// Record type tag (column 0)
    pub fn tag(&self) -> &str {
        &self.columns[0]
    }

    /// Action code (column 1)
    pub fn action(&self) -> &str {
        &self.columns[1]
    }

    /// Payload columns of a data row (tag and action stripped)
    pub fn payload(&self) -> &[String] {
        &self.columns[2..]
    }

    /// All columns, including tag and action
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// A typed field value bound for the store
///
/// Dates are stored as `YYYY-MM-DD HH:MM:SS` text and rely on SQLite's
/// type affinity for the remaining columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDateTime),
    Null,
}

impl ToSql for FieldValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Self::Text(s) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes()))),
            Self::Date(dt) => Ok(ToSqlOutput::Owned(Value::Text(
                dt.format(SQL_DATE_FORMAT).to_string(),
            ))),
            Self::Null => Ok(ToSqlOutput::Owned(Value::Null)),
        }
    }
}

/// Metadata record extracted from the single PIF header row
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractMetadata {
    pub version: String,
    pub source_system: String,
    pub toc: String,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub cycle_type: String,
    pub cycle_stage: String,
    pub creation_date: Option<NaiveDateTime>,
    pub sequence_number: String,
}

/// Rows inserted per record type during one run
///
/// Recording a count for a type that already has one OVERWRITES the
/// previous count. Well-formed extracts emit each record type as a single
/// contiguous group, so this never triggers; a file that violates that
/// layout inserts both batches but under-reports in the summary. The
/// footer validation then reflects the last group only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    counts: BTreeMap<RecordType, usize>,
}

impl LoadSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the rows inserted for one group, replacing any prior count
    /// for the same record type
    pub fn record(&mut self, record_type: RecordType, rows: usize) {
        self.counts.insert(record_type, rows);
    }

    /// Rows inserted for a record type; zero when the type never appeared
    pub fn count_for(&self, record_type: RecordType) -> usize {
        self.counts.get(&record_type).copied().unwrap_or(0)
    }

    /// Iterate recorded (type, count) pairs in tag order
    pub fn iter(&self) -> impl Iterator<Item = (RecordType, usize)> + '_ {
        self.counts.iter().map(|(t, c)| (*t, *c))
    }

    /// Total rows inserted across all record types
    pub fn total_rows(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Outcome of one successful file load
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub metadata: ExtractMetadata,
    pub summary: LoadSummary,
}
