//! BPLAN Loader Library
//!
//! A Rust library for loading Network Rail BPLAN geography extracts into
//! SQLite reference databases.
//!
//! This library provides tools for:
//! - Parsing BPLAN record lines (tab-delimited, windows-1252, optionally
//!   gzip-compressed) with lazy per-group streaming
//! - Converting date-valued fields with explicit NULL handling
//! - Batch-loading each record group into a normalized relational schema
//!   with declared foreign-key dependency order
//! - Validating the PIT integrity summary against the rows actually
//!   inserted, inside one atomic transaction per file
//! - Maintaining a metadata.json sidecar describing each database

pub mod constants;
pub mod error;
pub mod loader;
pub mod metadata;
pub mod models;
pub mod parser;
pub mod schema;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use error::{BplanError, Result};
pub use loader::{BplanStore, load_extract};
pub use models::{ExtractMetadata, LoadReport, LoadSummary, RawRow};
pub use schema::RecordType;
