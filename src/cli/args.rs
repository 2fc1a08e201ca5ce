//! Command-line argument definitions for the BPLAN loader
//!
//! This module defines the CLI interface using the clap derive API.

use std::path::PathBuf;

use clap::Parser;

/// CLI arguments for the BPLAN loader
///
/// Loads Network Rail BPLAN geography extracts into per-file SQLite
/// reference databases.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bplan_loader",
    version,
    about = "Load Network Rail BPLAN geography extracts into SQLite reference databases",
    long_about = "Parses BPLAN planning extracts (tab-delimited, windows-1252, optionally \
                  gzip-compressed), validates the trailing integrity summary against the rows \
                  actually inserted, and writes one .sqlite database per input file. A failure \
                  on one file is reported and does not stop the remaining files."
)]
pub struct Args {
    /// Input extract files to load
    ///
    /// Each file produces a sibling .sqlite database; any pre-existing
    /// database of the same name is overwritten.
    #[arg(required = true, value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Skip updating the metadata.json sidecar
    #[arg(long = "skip-metadata", help = "Do not update the metadata.json sidecar")]
    pub skip_metadata: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
