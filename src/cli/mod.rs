//! CLI for refinar
//!
//! Argument types plus the command dispatcher. The binary stays thin; every
//! command handler lives in [`commands`].

mod commands;
mod logging;

#[cfg(test)]
mod tests;

pub use commands::run_command;
pub use logging::LogLevel;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Refinar: FastSim refinement diagnostics
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "refinar")]
#[command(version)]
#[command(about = "Diagnostic plots for FastSim refinement regression training")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate plots from a dataset snapshot and loss log
    Plot(PlotArgs),

    /// Validate a plot specification without rendering
    Validate(ValidateArgs),

    /// Display information about a plot specification
    Info(InfoArgs),
}

/// One of the three plot families
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotFamily {
    /// Per-epoch averaged loss curves
    LearningCurves,
    /// 1D regression-variable comparisons
    Regression,
    /// Correlation-factor heatmaps
    Correlation,
}

/// Output format for the info command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON dump of the spec
    Json,
    /// YAML dump of the spec
    Yaml,
}

/// Arguments for the plot command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PlotArgs {
    /// Path to YAML plot specification
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Path to the jet dataset snapshot (JSON)
    #[arg(short, long)]
    pub dataset: PathBuf,

    /// Path to the loss log (JSON); learning curves are skipped without it
    #[arg(short, long)]
    pub loss_log: Option<PathBuf>,

    /// Output directory; plots land in <DIR>/plots
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Training identifier recorded in the manifest
    #[arg(short, long, default_value = "run")]
    pub training_id: String,

    /// Generate only one plot family
    #[arg(long, value_enum)]
    pub only: Option<PlotFamily>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML plot specification
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML plot specification
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> std::result::Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
