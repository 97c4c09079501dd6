//! Refinar CLI
//!
//! Diagnostic plot generation for FastSim refinement training.
//!
//! # Usage
//!
//! ```bash
//! # Generate all plots
//! refinar plot plots.yaml --dataset snapshot.json --loss-log losslog.json --output-dir out
//!
//! # Only one plot family
//! refinar plot plots.yaml --dataset snapshot.json --only regression
//!
//! # Validate a plot spec
//! refinar validate plots.yaml
//!
//! # Show spec info
//! refinar info plots.yaml --format yaml
//! ```

use clap::Parser;
use refinar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
