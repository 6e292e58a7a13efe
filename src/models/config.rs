//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default bound of the path and outcome hand-off channels
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Main configuration settings for depwalker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Root directories to scan
    pub paths: Vec<PathBuf>,

    /// Ecosystem names or aliases to include (empty means all)
    pub includes: Vec<String>,

    /// Path substrings to exclude from scanning
    pub excludes: Vec<String>,

    /// Output format (json, csv, md)
    pub output_format: OutputFormat,

    /// Whether to aggregate records by (name, category, packaging)
    pub aggregate: bool,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Number of extraction workers
    pub workers: usize,

    /// Bound of the path and outcome channels
    pub queue_capacity: usize,

    /// Whether to follow symbolic links during directory traversal
    pub follow_links: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show debug information
    pub verbose: bool,

    /// Whether to show the progress spinner
    pub show_progress: bool,

    /// Whether to use colors in the summary
    pub use_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            includes: Vec::new(),
            excludes: Vec::new(),
            output_format: OutputFormat::Csv,
            aggregate: false,
            output_file: None,
            workers: num_cpus::get(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            follow_links: false,
            quiet: false,
            verbose: false,
            show_progress: true,
            use_colors: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented JSON array
    Json,
    /// CSV with a header row
    Csv,
    /// Markdown table
    #[serde(alias = "markdown")]
    Md,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "md" | "markdown" => Ok(OutputFormat::Md),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Md => write!(f, "md"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub paths: Option<Vec<PathBuf>>,
    pub includes: Option<Vec<String>>,
    pub excludes: Option<Vec<String>>,
    pub output_format: Option<OutputFormat>,
    pub aggregate: Option<bool>,
    pub output_file: Option<PathBuf>,
    pub workers: Option<usize>,
    pub queue_capacity: Option<usize>,
    pub follow_links: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub show_progress: Option<bool>,
    pub use_colors: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.paths.is_some() {
            self.paths = other.paths;
        }
        if other.includes.is_some() {
            self.includes = other.includes;
        }
        if other.excludes.is_some() {
            self.excludes = other.excludes;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.aggregate.is_some() {
            self.aggregate = other.aggregate;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.workers.is_some() {
            self.workers = other.workers;
        }
        if other.queue_capacity.is_some() {
            self.queue_capacity = other.queue_capacity;
        }
        if other.follow_links.is_some() {
            self.follow_links = other.follow_links;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(paths) = &self.paths {
            settings.paths = paths.clone();
        }
        if let Some(includes) = &self.includes {
            settings.includes = includes.clone();
        }
        if let Some(excludes) = &self.excludes {
            settings.excludes = excludes.clone();
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(aggregate) = self.aggregate {
            settings.aggregate = aggregate;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(workers) = self.workers {
            settings.workers = workers;
        }
        if let Some(queue_capacity) = self.queue_capacity {
            settings.queue_capacity = queue_capacity;
        }
        if let Some(follow_links) = self.follow_links {
            settings.follow_links = follow_links;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }

        settings
    }
}
