//! CLI command implementations

use super::logging::{log, LogLevel};
use super::{Cli, Command, InfoArgs, OutputFormat, PlotArgs, PlotFamily, ValidateArgs};
use crate::config::load_spec;
use crate::dataset::JetDataset;
use crate::loss::LossLog;
use crate::plot::PlotterManager;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    match cli.command {
        Command::Plot(args) => run_plot(args, log_level),
        Command::Validate(args) => run_validate(args, log_level),
        Command::Info(args) => run_info(args, log_level),
    }
}

fn run_plot(args: PlotArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_spec(&args.config).map_err(|e| e.to_string())?;
    log(level, LogLevel::Normal, "✓ Config loaded and validated");

    let dataset = JetDataset::from_json_file(&args.dataset).map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Normal,
        &format!("✓ Dataset snapshot loaded ({} jets)", dataset.len()),
    );

    let loss_log = match &args.loss_log {
        Some(path) => {
            let log_data = LossLog::from_json_file(path).map_err(|e| e.to_string())?;
            log(
                level,
                LogLevel::Normal,
                &format!("✓ Loss log loaded ({} losses)", log_data.names().len()),
            );
            Some(log_data)
        }
        None => None,
    };

    let manager = PlotterManager::new(spec, &args.output_dir, &args.training_id)
        .map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Normal,
        &format!("Generating plots in {}", manager.plot_dir().display()),
    );

    let files = match args.only {
        None => {
            if loss_log.is_none() {
                log(
                    level,
                    LogLevel::Normal,
                    "No loss log supplied, skipping learning curves",
                );
            }
            manager
                .plot_all(&dataset, loss_log.as_ref())
                .map_err(|e| e.to_string())?
                .files
        }
        Some(PlotFamily::Regression) => manager
            .plot_regression_1d(&dataset)
            .map_err(|e| e.to_string())?,
        Some(PlotFamily::Correlation) => manager
            .plot_correlation_factors(&dataset)
            .map_err(|e| e.to_string())?,
        Some(PlotFamily::LearningCurves) => {
            let log_data = loss_log
                .as_ref()
                .ok_or("learning curves require --loss-log")?;
            manager
                .plot_learning_curves(log_data)
                .map_err(|e| e.to_string())?
        }
    };

    for file in &files {
        log(level, LogLevel::Verbose, &format!("Saved: {}", file.display()));
    }
    log(
        level,
        LogLevel::Normal,
        &format!("✓ {} plots generated", files.len()),
    );
    Ok(())
}

fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_spec(&args.config).map_err(|e| e.to_string())?;
    log(level, LogLevel::Normal, "✓ Config is valid");
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  {} variables, {} correlation variables",
            spec.variables.len(),
            spec.correlation_variables.len()
        ),
    );
    Ok(())
}

fn run_info(args: InfoArgs, _level: LogLevel) -> Result<(), String> {
    let spec = load_spec(&args.config).map_err(|e| e.to_string())?;

    match args.format {
        OutputFormat::Json => {
            let out = serde_json::to_string_pretty(&spec).map_err(|e| e.to_string())?;
            println!("{out}");
        }
        OutputFormat::Yaml => {
            let out = serde_yaml::to_string(&spec).map_err(|e| e.to_string())?;
            println!("{out}");
        }
        OutputFormat::Text => {
            println!("Plot specification: {}", args.config.display());
            println!("  Normalize distributions: {}", spec.normalize);
            if let Some(primary) = &spec.primary_loss {
                println!("  Primary loss: {primary}");
            }
            println!("  Variables ({}):", spec.variables.len());
            for var in &spec.variables {
                let binning = if var.bins.len() > 3 {
                    format!("{} edges", var.bins.len())
                } else {
                    format!("{} bins in [{}, {}]", var.bins[0], var.bins[1], var.bins[2])
                };
                println!("    {} ({}): {binning}", var.name, var.branch);
            }
            println!(
                "  Correlation variables ({}):",
                spec.correlation_variables.len()
            );
            for var in &spec.correlation_variables {
                println!("    {} ({})", var.name, var.branch);
            }
        }
    }
    Ok(())
}
