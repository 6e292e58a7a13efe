use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use depwalker::{
    cli::{args::Args, Command},
    config::{load_config, CliArgs},
    error::Result,
    models::config::OutputFormat,
};

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from(["depwalker"]);
    assert!(args.paths.is_empty());
    assert!(args.include.is_empty());
    assert!(args.exclude.is_empty());
    assert!(!args.json && !args.csv && !args.md);
    assert!(!args.aggregate);
    assert_eq!(args.workers, None);
    assert_eq!(args.output_file, None);

    let args = Args::parse_from([
        "depwalker",
        "/repo/one",
        "/repo/two",
        "--json",
        "--aggregate",
        "--include", "js,flutter",
        "--exclude", "node_modules",
        "--exclude", "vendor",
        "--workers", "3",
        "--queue-capacity", "0",
        "--output-file", "deps.json",
        "--no-progress",
        "--quiet",
    ]);

    assert_eq!(args.paths, vec![PathBuf::from("/repo/one"), PathBuf::from("/repo/two")]);
    assert!(args.json);
    assert!(args.aggregate);
    assert_eq!(args.include, vec!["js".to_string(), "flutter".to_string()]);
    assert_eq!(args.exclude, vec!["node_modules".to_string(), "vendor".to_string()]);
    assert_eq!(args.workers, Some(3));
    assert_eq!(args.queue_capacity, Some(0));
    assert_eq!(args.output_file, Some(PathBuf::from("deps.json")));
    assert!(args.no_progress);
    assert!(args.quiet);
}

#[test]
fn test_cli_args_to_settings() -> Result<()> {
    let temp_dir = tempdir()?;
    let config_path = temp_dir.path().join("depwalker.toml");
    fs::write(&config_path, "excludes = [\".git\"]\nqueue_capacity = 8\n")?;

    let args = Args::parse_from([
        "depwalker",
        "/repo",
        "--md",
        "-e", "dist",
        "--config", config_path.to_str().unwrap_or_default(),
    ]);
    let settings = load_config(CliArgs::from(&args))?;

    assert_eq!(settings.paths, vec![PathBuf::from("/repo")]);
    assert_eq!(settings.output_format, OutputFormat::Md);
    assert_eq!(settings.excludes, vec!["dist".to_string()]);
    assert_eq!(settings.queue_capacity, 8);
    Ok(())
}

#[test]
fn test_scan_command_writes_output_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let project = temp_dir.path().join("project");
    fs::create_dir_all(&project)?;
    fs::write(project.join("requirements.txt"), "flask==3.0.0\nflask==2.3.3\n")?;

    let config_path = temp_dir.path().join("empty.toml");
    fs::write(&config_path, "")?;
    let output_path = temp_dir.path().join("out.csv");

    let args = Args::parse_from([
        "depwalker",
        project.to_str().unwrap_or_default(),
        "--aggregate",
        "--config", config_path.to_str().unwrap_or_default(),
        "--output-file", output_path.to_str().unwrap_or_default(),
        "--no-progress",
        "--quiet",
    ]);

    let command = Command::from_args(args);
    assert_eq!(command.run(), 0);

    let written = fs::read_to_string(&output_path)?;
    assert_eq!(
        written,
        "Name,MinVersion,MaxVersion,Count,Category,Packaging\nflask,2.3.3,3.0.0,2,prod,python\n"
    );
    Ok(())
}

#[test]
fn test_missing_config_file_exits_critical() {
    let args = Args::parse_from(["depwalker", ".", "--config", "/no/such/depwalker.toml", "-q"]);
    assert_eq!(Command::from_args(args).run(), 2);
}
