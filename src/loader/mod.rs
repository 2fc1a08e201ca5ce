//! Bulk loading of parsed BPLAN records into SQLite
//!
//! The loader ties the parsing pipeline to the store:
//! - [`store`] - database handle, schema DDL, and insert statements
//! - [`orchestrator`] - the per-run state machine and batch inserts
//! - [`footer`] - PIT integrity-summary validation
//!
//! One run equals one transaction: a failed run commits nothing.

pub mod footer;
pub mod orchestrator;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use footer::validate_footer;
pub use orchestrator::load_extract;
pub use store::BplanStore;
