//! PIF header extraction
//!
//! The single PIF group carries one row describing the extract: source
//! system, validity window, planning cycle and sequence number. PIF rows
//! have no action code, so only the leading tag column is stripped before
//! transformation.

use std::io::Read;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::error::{BplanError, Result};
use crate::models::{ExtractMetadata, FieldValue, RawRow};
use crate::parser::grouper::RecordGrouper;
use crate::parser::transform::transform_row;
use crate::schema::RecordType;

/// Consume the PIF group and build the extract metadata record
///
/// The group is expected to hold exactly one row; the first row is used
/// and any extras are drained with a warning, matching the feed's
/// published behavior.
pub fn extract_header<R: Read>(groups: &mut RecordGrouper<R>) -> Result<ExtractMetadata> {
    let row = groups
        .next_row()?
        .ok_or_else(|| BplanError::invalid_format("PIF group contains no rows"))?;

    let mut extra = 0usize;
    while groups.next_row()?.is_some() {
        extra += 1;
    }
    if extra > 0 {
        warn!("PIF group carried {} extra row(s), ignored", extra);
    }

    let metadata = metadata_from_row(&row)?;
    debug!(
        "Extract header: source {}, sequence {}",
        metadata.source_system, metadata.sequence_number
    );
    Ok(metadata)
}

/// Build the metadata record positionally from one PIF row
pub fn metadata_from_row(row: &RawRow) -> Result<ExtractMetadata> {
    // PIF rows carry no action code: only the tag column is stripped
    let payload = &row.columns()[1..];
    let values = transform_row(RecordType::Pif, payload)?;

    Ok(ExtractMetadata {
        version: text_at(&values, 0),
        source_system: text_at(&values, 1),
        toc: text_at(&values, 2),
        start_date: date_at(&values, 3),
        end_date: date_at(&values, 4),
        cycle_type: text_at(&values, 5),
        cycle_stage: text_at(&values, 6),
        creation_date: date_at(&values, 7),
        sequence_number: text_at(&values, 8),
    })
}

fn text_at(values: &[FieldValue], index: usize) -> String {
    match &values[index] {
        FieldValue::Text(s) => s.clone(),
        _ => String::new(),
    }
}

fn date_at(values: &[FieldValue], index: usize) -> Option<NaiveDateTime> {
    match &values[index] {
        FieldValue::Date(dt) => Some(*dt),
        _ => None,
    }
}
