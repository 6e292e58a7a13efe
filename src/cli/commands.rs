//! Command implementations

use super::Args;
use crate::config::{self, CliArgs, FileConfig, DEFAULT_CONFIG_FILE};
use crate::core::{aggregate, Pipeline};
use crate::error::{ErrorSeverity, Result};
use crate::models::config::Settings;
use crate::models::results::ScanResults;
use crate::output::{create_formatter, create_progress_callback, create_writer, ProgressReporter};
use ansi_term::Colour::{Green, Red, Yellow};
use std::path::PathBuf;
use std::sync::Arc;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Scan the configured roots and render the results
    Scan(Args),
    /// Write a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }
        Command::Scan(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Scan(args) => {
                let settings = config::load_config(CliArgs::from(args))?;
                log::debug!("Settings: {:?}", settings);
                run_scan(&settings)
            }
            Command::Init => {
                let source = FileConfig::with_path(PathBuf::from(DEFAULT_CONFIG_FILE));
                source.create_default()?;
                eprintln!("Created default configuration file at: {}", source.path().display());
                Ok(())
            }
        }
    }

    /// Run the command and map any error to an exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(_) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                if let Some(suggestion) = err.suggestion() {
                    eprintln!("Suggestion: {}", suggestion);
                }
                exit_code(err.severity())
            }
        }
    }
}

/// Exit status for a failure of the given severity
pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}

/// Scan, optionally aggregate, render and write
pub fn run_scan(settings: &Settings) -> Result<()> {
    let pipeline = Pipeline::new(settings.clone());

    let reporter = Arc::new(ProgressReporter::new(settings.show_progress && !settings.quiet));
    let results = if reporter.is_enabled() {
        let scanned = pipeline.run_with_progress(create_progress_callback(reporter.clone()));
        reporter.finish();
        scanned?
    } else {
        pipeline.run()?
    };

    let rendered = render(settings, &results)?;
    create_writer(settings.output_file.as_ref()).write(&rendered)?;

    if !settings.quiet {
        print_summary(&results, settings.use_colors);
    }

    Ok(())
}

/// Render results in the configured format, aggregated if requested
pub fn render(settings: &Settings, results: &ScanResults) -> Result<String> {
    let formatter = create_formatter(settings.output_format);
    if settings.aggregate {
        formatter.format_aggregated(&aggregate(&results.dependencies))
    } else {
        formatter.format_flat(&results.dependencies)
    }
}

fn print_summary(results: &ScanResults, use_colors: bool) {
    let summary = &results.summary;
    let line = format!(
        "Scanned {} manifests: {} dependencies in {}",
        summary.manifests_parsed,
        summary.dependencies_found,
        summary.format_duration()
    );

    if use_colors {
        eprintln!("{}", Green.paint(line));
    } else {
        eprintln!("{}", line);
    }

    if summary.manifests_failed == 0 {
        return;
    }

    let failed = format!("{} manifests could not be parsed", summary.manifests_failed);
    if use_colors {
        eprintln!("{}", Yellow.bold().paint(failed));
    } else {
        eprintln!("{}", failed);
    }

    for failure in &results.errors {
        let detail = format!("  {}: {}", failure.path.display(), failure.error);
        if use_colors && failure.severity != ErrorSeverity::Warning {
            eprintln!("{}", Red.paint(detail));
        } else {
            eprintln!("{}", detail);
        }
    }
}
