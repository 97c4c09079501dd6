//! CLI argument parsing tests

use super::*;

#[test]
fn test_plot_command_parses() {
    let cli = parse_args([
        "refinar",
        "plot",
        "plots.yaml",
        "--dataset",
        "snapshot.json",
    ])
    .unwrap();

    match cli.command {
        Command::Plot(args) => {
            assert_eq!(args.config.to_str().unwrap(), "plots.yaml");
            assert_eq!(args.dataset.to_str().unwrap(), "snapshot.json");
            assert_eq!(args.loss_log, None);
            assert_eq!(args.output_dir.to_str().unwrap(), ".");
            assert_eq!(args.training_id, "run");
            assert_eq!(args.only, None);
        }
        _ => panic!("Expected Plot command"),
    }
}

#[test]
fn test_plot_command_requires_dataset() {
    assert!(parse_args(["refinar", "plot", "plots.yaml"]).is_err());
}

#[test]
fn test_plot_command_only_family() {
    let cli = parse_args([
        "refinar",
        "plot",
        "plots.yaml",
        "--dataset",
        "snapshot.json",
        "--only",
        "learning-curves",
    ])
    .unwrap();

    match cli.command {
        Command::Plot(args) => assert_eq!(args.only, Some(PlotFamily::LearningCurves)),
        _ => panic!("Expected Plot command"),
    }
}

#[test]
fn test_plot_command_overrides() {
    let cli = parse_args([
        "refinar",
        "plot",
        "plots.yaml",
        "--dataset",
        "snapshot.json",
        "--loss-log",
        "losslog.json",
        "--output-dir",
        "out",
        "--training-id",
        "training-07",
    ])
    .unwrap();

    match cli.command {
        Command::Plot(args) => {
            assert_eq!(args.loss_log.unwrap().to_str().unwrap(), "losslog.json");
            assert_eq!(args.output_dir.to_str().unwrap(), "out");
            assert_eq!(args.training_id, "training-07");
        }
        _ => panic!("Expected Plot command"),
    }
}

#[test]
fn test_validate_command_parses() {
    let cli = parse_args(["refinar", "validate", "plots.yaml"]).unwrap();
    match cli.command {
        Command::Validate(args) => {
            assert_eq!(args.config.to_str().unwrap(), "plots.yaml");
        }
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn test_info_command_formats() {
    let cli = parse_args(["refinar", "info", "plots.yaml"]).unwrap();
    match cli.command {
        Command::Info(args) => assert_eq!(args.format, OutputFormat::Text),
        _ => panic!("Expected Info command"),
    }

    let cli = parse_args(["refinar", "info", "plots.yaml", "--format", "json"]).unwrap();
    match cli.command {
        Command::Info(args) => assert_eq!(args.format, OutputFormat::Json),
        _ => panic!("Expected Info command"),
    }
}

#[test]
fn test_global_flags() {
    let cli = parse_args(["refinar", "validate", "plots.yaml", "--quiet"]).unwrap();
    assert!(cli.quiet);
    assert!(!cli.verbose);

    let cli = parse_args(["refinar", "-v", "validate", "plots.yaml"]).unwrap();
    assert!(cli.verbose);
}

#[test]
fn test_no_command_is_error() {
    assert!(parse_args(["refinar"]).is_err());
}
