//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::Args;
use crate::error::{Result, ScanError};
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments relevant to settings
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub paths: Vec<PathBuf>,
    pub json: bool,
    pub csv: bool,
    pub md: bool,
    pub aggregate: bool,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub workers: Option<usize>,
    pub queue_capacity: Option<usize>,
    pub follow_links: bool,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
    pub no_progress: bool,
    pub no_colors: bool,
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// The single selected output format, if any.
    ///
    /// Selecting more than one format is a configuration error.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        let selected: Vec<OutputFormat> = [
            (self.json, OutputFormat::Json),
            (self.csv, OutputFormat::Csv),
            (self.md, OutputFormat::Md),
        ]
        .into_iter()
        .filter_map(|(set, format)| set.then_some(format))
        .collect();

        match selected.as_slice() {
            [] => Ok(None),
            [format] => Ok(Some(*format)),
            _ => Err(ScanError::config_error(
                "Only one of --json, --csv or --md may be given",
            )),
        }
    }
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            paths: args.paths.clone(),
            json: args.json,
            csv: args.csv,
            md: args.md,
            aggregate: args.aggregate,
            include: args.include.clone(),
            exclude: args.exclude.clone(),
            workers: args.workers,
            queue_capacity: args.queue_capacity,
            follow_links: args.follow_links,
            output_file: args.output_file.clone(),
            quiet: args.quiet,
            verbose: args.verbose,
            no_progress: args.no_progress,
            no_colors: args.no_colors,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }

    /// Create a CLI configuration source from parsed Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

fn non_empty<T: Clone>(values: &[T]) -> Option<Vec<T>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            paths: non_empty(&self.args.paths),
            includes: non_empty(&self.args.include),
            excludes: non_empty(&self.args.exclude),
            output_format: self.args.output_format()?,
            output_file: self.args.output_file.clone(),
            workers: self.args.workers,
            queue_capacity: self.args.queue_capacity,
            ..Default::default()
        };

        // Flags only override lower layers when set
        if self.args.aggregate {
            settings.aggregate = Some(true);
        }
        if self.args.follow_links {
            settings.follow_links = Some(true);
        }
        if self.args.quiet {
            settings.quiet = Some(true);
        }
        if self.args.verbose {
            settings.verbose = Some(true);
        }
        if self.args.no_progress {
            settings.show_progress = Some(false);
        }
        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
