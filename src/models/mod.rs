//! Data models and structures for depwalker

pub mod config;
pub mod dependency;
pub mod ecosystem;
pub mod results;

pub use config::{OutputFormat, PartialSettings, Settings};
pub use dependency::{
    AggregatedDependencyRecord, DeclaredDependency, FlatDependencyRecord, ManifestParseOutcome,
};
pub use ecosystem::{Ecosystem, MANIFESTS};
pub use results::{ScanFailure, ScanResults, ScanSummary};
