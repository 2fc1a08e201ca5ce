//! Test fixtures shared across the parser test modules

use std::io::Cursor;

use crate::models::RawRow;
use crate::parser::grouper::RecordGrouper;
use crate::parser::reader::RowReader;

// Test modules
mod grouper_tests;

/// A representative PIF header line
pub const PIF_LINE: &str = "PIF\t1.0\tTPS\tNetwork Rail\t19-05-2024 00:00:00\t\
                            14-12-2024 00:00:00\tP\t1\t02-05-2024 11:30:00\t123";

/// Join record lines with the extract's CRLF terminators
pub fn extract(lines: &[&str]) -> String {
    let mut content = lines.join("\r\n");
    content.push_str("\r\n");
    content
}

/// Row reader over in-memory extract content
pub fn reader_from(content: &str) -> RowReader<Cursor<Vec<u8>>> {
    RowReader::new(Cursor::new(content.as_bytes().to_vec()))
}

/// Grouper over in-memory extract content
pub fn grouper_from(content: &str) -> RecordGrouper<Cursor<Vec<u8>>> {
    RecordGrouper::new(reader_from(content))
}

/// Build a raw row from string columns
pub fn row(columns: &[&str]) -> RawRow {
    RawRow::new(columns.iter().map(|s| s.to_string()).collect()).unwrap()
}
