//! depwalker - dependency manifest inventory
//!
//! Walks directory trees, extracts the dependencies declared by every
//! supported manifest (package.json, pubspec.yaml, go.mod, requirements.txt)
//! and renders them flat or aggregated as JSON, CSV or Markdown.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;

pub use crate::core::{aggregate, Pipeline};
pub use error::{ErrorSeverity, Result, ScanError};
pub use models::{
    AggregatedDependencyRecord, DeclaredDependency, Ecosystem, FlatDependencyRecord,
    ManifestParseOutcome, OutputFormat, ScanResults, Settings,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
