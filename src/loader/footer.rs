//! PIT footer validation
//!
//! The footer's single row declares, for every record type emitted, the
//! number of add records plus update and delete counts. Validation checks
//! each declared count against the rows actually inserted and rejects any
//! nonzero update/delete count, since those payloads are unsupported.

use tracing::debug;

use crate::error::{BplanError, Result};
use crate::models::{LoadSummary, RawRow};
use crate::schema::RecordType;

/// One (record type, expected count, update count, delete count)
/// declaration from the footer row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterEntry {
    pub record_type: RecordType,
    pub expected: i64,
    pub update_count: i64,
    pub delete_count: i64,
}

/// Decode the footer row into its count quadruples
///
/// Quadruples start at column 1 (column 0 is the PIT tag itself).
pub fn decode_footer(row: &RawRow) -> Result<Vec<FooterEntry>> {
    let columns = &row.columns()[1..];
    if columns.len() % 4 != 0 {
        return Err(BplanError::invalid_format(format!(
            "PIT row has {} count column(s), expected a multiple of 4",
            columns.len()
        )));
    }

    columns
        .chunks_exact(4)
        .map(|quad| {
            let record_type = RecordType::from_tag(&quad[0])
                .ok_or_else(|| BplanError::unknown_record_type(&quad[0]))?;
            Ok(FooterEntry {
                record_type,
                expected: parse_count(&quad[1], record_type)?,
                update_count: parse_count(&quad[2], record_type)?,
                delete_count: parse_count(&quad[3], record_type)?,
            })
        })
        .collect()
}

/// Check the footer declarations against the run's load summary
///
/// A declared type that never appeared in the data compares against zero.
pub fn validate_footer(row: &RawRow, summary: &LoadSummary) -> Result<()> {
    for entry in decode_footer(row)? {
        let actual = summary.count_for(entry.record_type) as i64;
        debug!(
            "Footer check {}: expected {}, inserted {}",
            entry.record_type, entry.expected, actual
        );

        if actual != entry.expected {
            return Err(BplanError::CountMismatch {
                record_type: entry.record_type,
                expected: entry.expected,
                actual,
            });
        }

        if entry.update_count != 0 || entry.delete_count != 0 {
            return Err(BplanError::UnsupportedUpdate {
                record_type: entry.record_type,
            });
        }
    }

    Ok(())
}

fn parse_count(value: &str, record_type: RecordType) -> Result<i64> {
    value.parse().map_err(|_| {
        BplanError::invalid_format(format!(
            "non-numeric count '{}' in PIT entry for {}",
            value, record_type
        ))
    })
}
