//! Record-stream parsing for BPLAN extracts
//!
//! The parser is organized into sequential pipeline stages:
//! - [`reader`] - decompression, windows-1252 decoding, and line splitting
//! - [`grouper`] - lazy partitioning into (tag, action) record groups
//! - [`transform`] - text columns to typed field values, with date parsing
//! - [`header`] - PIF header group extraction
//!
//! Each stage consumes its input exactly once, in order; nothing here
//! buffers the whole file.

pub mod grouper;
pub mod header;
pub mod reader;
pub mod transform;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use grouper::{GroupKey, RecordGrouper};
pub use header::extract_header;
pub use reader::{RowReader, open_extract};
pub use transform::transform_row;
