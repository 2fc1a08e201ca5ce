//! Extract input handling: decompression, character decoding, and line
//! splitting
//!
//! BPLAN extracts are tab-separated, unquoted, CRLF-terminated and encoded
//! in windows-1252. Published files are usually gzip-compressed. The reader
//! yields decoded [`RawRow`]s lazily; the input is never fully buffered.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use encoding_rs::WINDOWS_1252;
use flate2::read::GzDecoder;
use tracing::debug;

use crate::constants::{FIELD_DELIMITER, GZIP_EXTENSION};
use crate::error::Result;
use crate::models::RawRow;

/// Open an extract file, transparently decompressing `.gz` inputs
pub fn open_extract(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == GZIP_EXTENSION) {
        debug!("Opening gzip-compressed extract: {}", path.display());
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        debug!("Opening plain extract: {}", path.display());
        Ok(Box::new(file))
    }
}

/// Lazy reader over the raw record lines of one extract
pub struct RowReader<R: Read> {
    reader: csv::Reader<R>,
    record: ByteRecord,
}

impl<R: Read> RowReader<R> {
    /// Wrap an input stream with the BPLAN dialect: tab-delimited, no
    /// quoting, no header line, record widths varying by type
    pub fn new(input: R) -> Self {
        let reader = ReaderBuilder::new()
            .delimiter(FIELD_DELIMITER)
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(input);

        Self {
            reader,
            record: ByteRecord::new(),
        }
    }

    /// Read the next record line, decoding each column from windows-1252.
    /// Returns `None` at end of input.
    pub fn next_row(&mut self) -> Result<Option<RawRow>> {
        if !self.reader.read_byte_record(&mut self.record)? {
            return Ok(None);
        }

        let columns = self
            .record
            .iter()
            .map(|field| WINDOWS_1252.decode_without_bom_handling(field).0.into_owned())
            .collect();

        RawRow::new(columns).map(Some)
    }
}
