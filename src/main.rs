use bplan_loader::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();
    commands::setup_logging(&args);

    match commands::run(&args) {
        Ok(stats) => {
            if stats.files_failed > 0 {
                eprintln!(
                    "Loaded {} file(s), {} failed",
                    stats.files_loaded, stats.files_failed
                );
            }
            // Per-file failures are reported on stderr but do not fail the
            // invocation; only an unusable metadata sidecar does
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {error}");
            process::exit(1);
        }
    }
}
