//! Application constants for the BPLAN loader
//!
//! This module contains the fixed values of the BPLAN extract format and
//! the defaults used throughout the application.

// =============================================================================
// Extract Format
// =============================================================================

/// Date-time format used by BPLAN date fields (`28-05-2024 00:00:00`)
pub const BPLAN_DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Date-time format used when storing dates in SQLite text columns
pub const SQL_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The only supported action code; update and delete payloads are rejected
pub const ADD_ACTION: &str = "A";

/// Field delimiter within a record line
pub const FIELD_DELIMITER: u8 = b'\t';

// =============================================================================
// Files and Paths
// =============================================================================

/// Extension identifying gzip-compressed extracts
pub const GZIP_EXTENSION: &str = "gz";

/// Extension of generated database files
pub const SQLITE_EXTENSION: &str = "sqlite";

/// Sidecar file describing the generated databases
pub const METADATA_FILE_NAME: &str = "metadata.json";
