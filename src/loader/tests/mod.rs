//! Test fixtures shared across the loader test modules
//!
//! Extracts are assembled as CRLF-joined record lines and loaded into
//! in-memory databases so every test observes real transaction and
//! constraint behavior.

use std::io::Cursor;

use crate::error::Result;
use crate::loader::orchestrator::load_extract;
use crate::loader::store::BplanStore;
use crate::models::{LoadReport, RawRow};
use crate::parser::reader::RowReader;

mod store_tests;

/// A representative PIF header line
pub const PIF_LINE: &str = "PIF\t1.0\tTPS\tNetwork Rail\t19-05-2024 00:00:00\t\
                            14-12-2024 00:00:00\tP\t1\t02-05-2024 11:30:00\t123";

/// Three distinct REF rows (distinct codes keep the composite key happy)
pub const REF_LINES: [&str; 3] = [
    "REF\tA\tZNE\tQ\tScotland",
    "REF\tA\tZNE\tS\tSouthern",
    "REF\tA\tPWR\tDC\tDC third rail",
];

/// A LOC row referencing zone Q
pub const LOC_LINE: &str =
    "LOC\tA\tHORSHAM\tHorsham\t19-05-2024 00:00:00\t\t530000\t160000\tM\tQ\t87149\tN\t";

/// Join record lines with the extract's CRLF terminators
pub fn extract(lines: &[&str]) -> String {
    let mut content = lines.join("\r\n");
    content.push_str("\r\n");
    content
}

/// Load extract content into a fresh in-memory store, returning the run
/// outcome together with the store for post-run inspection
pub fn load_str(content: &str) -> (Result<LoadReport>, BplanStore) {
    let mut store = BplanStore::open_in_memory().expect("in-memory store");
    let reader = RowReader::new(Cursor::new(content.as_bytes().to_vec()));
    let result = load_extract(reader, &mut store);
    (result, store)
}

/// Count the rows committed to one table
pub fn table_count(store: &BplanStore, table: &str) -> i64 {
    store
        .connection()
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))
        .expect("count query")
}

/// Build a raw row from string columns
pub fn row(columns: &[&str]) -> RawRow {
    RawRow::new(columns.iter().map(|s| s.to_string()).collect()).unwrap()
}
