//! Command execution for the BPLAN loader CLI
//!
//! Processes each input file independently: a failure on one file is
//! logged to stderr and the remaining files still run. The process exits
//! successfully regardless of per-file failures, so feed automation can
//! inspect the logs rather than the exit code.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::cli::args::Args;
use crate::constants::{METADATA_FILE_NAME, SQLITE_EXTENSION};
use crate::error::Result;
use crate::loader::orchestrator::load_extract;
use crate::loader::store::BplanStore;
use crate::metadata::{DatabaseEntry, MetadataFile};
use crate::models::LoadReport;
use crate::parser::reader::{RowReader, open_extract};

/// Per-invocation outcome counts
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub files_loaded: usize,
    pub files_failed: usize,
}

/// Set up tracing from the CLI verbosity flags
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bplan_loader={}", args.get_log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Run the loader over every input file
pub fn run(args: &Args) -> Result<RunStats> {
    let mut stats = RunStats::default();
    let metadata_path = PathBuf::from(METADATA_FILE_NAME);
    let mut metadata = MetadataFile::load_or_template(&metadata_path);

    for input in &args.inputs {
        match process_file(input) {
            Ok(report) => {
                info!(
                    "Loaded {}: {} rows",
                    input.display(),
                    report.summary.total_rows()
                );
                let stem = database_key(input);
                metadata
                    .databases
                    .insert(stem, DatabaseEntry::from_report(&report));
                stats.files_loaded += 1;
            }
            Err(e) => {
                error!("Unable to process {}: {}", input.display(), e);
                stats.files_failed += 1;
            }
        }
    }

    if !args.skip_metadata {
        metadata.save(&metadata_path)?;
    }

    Ok(stats)
}

/// Load one extract into a sibling `.sqlite` database, removing any
/// previous output first
pub fn process_file(input: &Path) -> Result<LoadReport> {
    let db_path = input.with_extension(SQLITE_EXTENSION);
    match std::fs::remove_file(&db_path) {
        Ok(()) => info!("Removed previous database {}", db_path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    let reader = RowReader::new(open_extract(input)?);
    let mut store = BplanStore::create(&db_path)?;
    load_extract(reader, &mut store)
}

fn database_key(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string_lossy().into_owned())
}
