//! Lazy grouping of the record stream by (tag, action) key
//!
//! The extract emits all records of a kind contiguously, so grouping is a
//! single forward pass: the grouper holds a one-row lookahead and the key
//! of the group in progress. Two non-adjacent runs with the same key are
//! two separate groups; the grouper never re-sorts or buffers the file.

use std::io::Read;

use tracing::trace;

use crate::error::Result;
use crate::models::RawRow;
use crate::parser::reader::RowReader;

/// Identity of one record group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupKey {
    /// Record type tag (column 0)
    pub tag: String,
    /// Action code (column 1; for PIF/PIT rows this is the first payload
    /// column, which is constant within the single header/footer group)
    pub action: String,
}

impl GroupKey {
    fn of(row: &RawRow) -> Self {
        Self {
            tag: row.tag().to_string(),
            action: row.action().to_string(),
        }
    }

    fn matches(&self, row: &RawRow) -> bool {
        self.tag == row.tag() && self.action == row.action()
    }
}

/// Pull-based grouping iterator over the raw row stream
///
/// Usage is strictly alternating: [`next_group`](Self::next_group) yields
/// the next group's key, then [`next_row`](Self::next_row) yields that
/// group's rows until it returns `None`. Advancing to the next group
/// drains any rows the caller left unconsumed.
pub struct RecordGrouper<R: Read> {
    rows: RowReader<R>,
    lookahead: Option<RawRow>,
    current: Option<GroupKey>,
    eof: bool,
}

impl<R: Read> RecordGrouper<R> {
    pub fn new(rows: RowReader<R>) -> Self {
        Self {
            rows,
            lookahead: None,
            current: None,
            eof: false,
        }
    }

    /// Advance to the next group, returning its key, or `None` when the
    /// input is exhausted
    pub fn next_group(&mut self) -> Result<Option<GroupKey>> {
        // Exhaust whatever remains of the current group first
        while self.next_row()?.is_some() {}
        self.current = None;

        self.fill_lookahead()?;
        match &self.lookahead {
            Some(row) => {
                let key = GroupKey::of(row);
                trace!("Starting group ({}, {})", key.tag, key.action);
                self.current = Some(key.clone());
                Ok(Some(key))
            }
            None => Ok(None),
        }
    }

    /// Pull the next row of the current group; `None` once the group is
    /// exhausted (or before the first `next_group` call)
    pub fn next_row(&mut self) -> Result<Option<RawRow>> {
        let Some(key) = self.current.clone() else {
            return Ok(None);
        };

        self.fill_lookahead()?;
        let in_group = matches!(&self.lookahead, Some(row) if key.matches(row));
        if in_group {
            Ok(self.lookahead.take())
        } else {
            Ok(None)
        }
    }

    fn fill_lookahead(&mut self) -> Result<()> {
        if self.lookahead.is_none() && !self.eof {
            self.lookahead = self.rows.next_row()?;
            if self.lookahead.is_none() {
                self.eof = true;
            }
        }
        Ok(())
    }
}
