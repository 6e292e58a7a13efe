//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// depwalker - inventory declared dependencies across project trees
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "depwalker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find dependency manifests under one or more directories and report what they declare")]
#[command(long_about = "depwalker walks one or more directory trees, finds package.json, pubspec.yaml, \
go.mod and requirements.txt files, and reports every declared dependency. Results can be \
emitted one row per declaration or aggregated per (name, category, ecosystem) with the \
lowest and highest semantic version seen.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Scan the current directory, CSV to stdout
    depwalker .

    # Scan several repositories at once
    depwalker ~/src/api ~/src/web

Filtering:
    # Only Node and Python manifests
    depwalker . --include node,python

    # Aliases work too (js, ts, flutter, golang, py, pip)
    depwalker . -i ts -i golang

    # Skip vendored trees (literal path substrings)
    depwalker . --exclude node_modules,vendor,.venv

Output Options:
    # JSON or Markdown instead of CSV
    depwalker . --json
    depwalker . --md

    # One row per dependency with min/max version and count
    depwalker . --aggregate --md

    # Save results to a file
    depwalker . --json --output-file deps.json

Configuration:
    # Use a specific configuration file
    depwalker . --config ./depwalker.toml

    # Create a default configuration file
    depwalker --init
")]
pub struct Args {
    /// Root directories to scan
    #[arg(value_name = "PATHS", help = "Directories to scan (may also come from the config file or DEPWALKER_PATHS)")]
    pub paths: Vec<PathBuf>,

    /// Emit JSON
    #[arg(long, help = "Output an indented JSON array")]
    pub json: bool,

    /// Emit CSV
    #[arg(long, help = "Output CSV with a header row (the default)")]
    pub csv: bool,

    /// Emit a Markdown table
    #[arg(long, help = "Output a Markdown table")]
    pub md: bool,

    /// Aggregate by (name, category, packaging)
    #[arg(short, long, help = "Group records by name, category and ecosystem, with count and min/max version")]
    pub aggregate: bool,

    /// Ecosystems to include
    #[arg(short, long, value_name = "ECOSYSTEMS", value_delimiter = ',', help = "Ecosystems to include: node, dart, go, python or an alias (comma-separated, repeatable; default: all)")]
    pub include: Vec<String>,

    /// Path substrings to exclude
    #[arg(short, long, value_name = "SUBSTRINGS", value_delimiter = ',', help = "Skip any path containing one of these literal substrings (comma-separated, repeatable)")]
    pub exclude: Vec<String>,

    /// Worker pool size
    #[arg(short, long, value_name = "N", help = "Number of extraction workers (default: number of CPUs)")]
    pub workers: Option<usize>,

    /// Channel bound
    #[arg(long, value_name = "N", help = "Bound of the path and outcome queues (0 for direct hand-off)")]
    pub queue_capacity: Option<usize>,

    /// Follow symbolic links during directory traversal
    #[arg(long, help = "Follow symbolic links while walking (cycles are detected and reported)")]
    pub follow_links: bool,

    /// Output file path (stdout if not specified)
    #[arg(short, long, value_name = "FILE", help = "File to write output to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .depwalker.toml in the current directory, then the home directory)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.depwalker.toml) in the current directory")]
    pub init: bool,

    /// Suppress non-essential output
    #[arg(short, long, help = "Only print errors and the results")]
    pub quiet: bool,

    /// Show debug information
    #[arg(short, long, help = "Show debug logging and configuration details")]
    pub verbose: bool,

    /// Disable the progress spinner
    #[arg(long, help = "Disable the progress spinner (useful in CI or when redirecting stderr)")]
    pub no_progress: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored summary output")]
    pub no_colors: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
