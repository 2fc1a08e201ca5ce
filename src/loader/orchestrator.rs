//! Run orchestration: the grouped stream driven through one transaction
//!
//! State machine over the record groups: the first group must be the PIF
//! header, every later group is a data group batch-inserted into its
//! table, until the optional PIT footer closes the run. Any group after
//! the footer is fatal. All inserts happen inside a single transaction;
//! on any error the transaction rolls back and the store keeps nothing
//! from the run.

use std::io::Read;

use rusqlite::{Transaction, params_from_iter};
use tracing::{debug, info};

use crate::constants::ADD_ACTION;
use crate::error::{BplanError, Result};
use crate::loader::footer::validate_footer;
use crate::loader::store::{BplanStore, insert_sql};
use crate::models::{ExtractMetadata, LoadReport, LoadSummary};
use crate::parser::grouper::RecordGrouper;
use crate::parser::header::extract_header;
use crate::parser::reader::RowReader;
use crate::parser::transform::transform_row;
use crate::schema::RecordType;

/// Load one extract into the store, atomically
///
/// Returns the header metadata and per-type row counts on success. On any
/// failure the transaction is dropped uncommitted and nothing from this
/// run is retained in the database.
pub fn load_extract<R: Read>(rows: RowReader<R>, store: &mut BplanStore) -> Result<LoadReport> {
    let tx = store.transaction()?;
    let report = run_groups(&tx, RecordGrouper::new(rows))?;
    tx.commit()?;

    info!(
        "Load complete: {} rows across {} record types",
        report.summary.total_rows(),
        report.summary.iter().count()
    );
    Ok(report)
}

fn run_groups<R: Read>(tx: &Transaction<'_>, mut groups: RecordGrouper<R>) -> Result<LoadReport> {
    let mut metadata: Option<ExtractMetadata> = None;
    let mut summary = LoadSummary::new();
    let mut footer_seen = false;

    while let Some(key) = groups.next_group()? {
        if footer_seen {
            return Err(BplanError::TrailingData { tag: key.tag });
        }

        let record_type = RecordType::from_tag(&key.tag)
            .ok_or_else(|| BplanError::unknown_record_type(&key.tag))?;

        match record_type {
            RecordType::Pif => {
                if metadata.is_some() {
                    return Err(BplanError::MultipleHeader);
                }
                metadata = Some(extract_header(&mut groups)?);
            }
            RecordType::Pit => {
                let row = groups
                    .next_row()?
                    .ok_or_else(|| BplanError::invalid_format("PIT group contains no rows"))?;
                validate_footer(&row, &summary)?;
                footer_seen = true;
            }
            _ => {
                if metadata.is_none() {
                    return Err(BplanError::MissingHeader);
                }
                if key.action != ADD_ACTION {
                    return Err(BplanError::UnsupportedAction {
                        record_type,
                        action: key.action,
                    });
                }

                let inserted = insert_group(tx, record_type, &mut groups)?;
                debug!("Inserted {} {} row(s)", inserted, record_type);
                // A repeated (non-contiguous) group overwrites the earlier
                // count while both batches stay in the store
                summary.record(record_type, inserted);
            }
        }
    }

    let metadata = metadata.ok_or(BplanError::MissingHeader)?;
    Ok(LoadReport { metadata, summary })
}

/// Batch-insert every row of the current group through one prepared
/// statement, returning the number of rows submitted
fn insert_group<R: Read>(
    tx: &Transaction<'_>,
    record_type: RecordType,
    groups: &mut RecordGrouper<R>,
) -> Result<usize> {
    let mut stmt = tx.prepare_cached(&insert_sql(record_type))?;

    let mut inserted = 0usize;
    while let Some(row) = groups.next_row()? {
        let values = transform_row(record_type, row.payload())?;
        stmt.execute(params_from_iter(values.iter()))?;
        inserted += 1;
    }

    Ok(inserted)
}
