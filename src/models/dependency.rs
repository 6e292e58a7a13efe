//! Dependency data structures flowing through the scan pipeline

use crate::error::ScanError;
use crate::models::ecosystem::Ecosystem;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single dependency declared in one manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredDependency {
    pub name: String,
    /// Raw version as written in the manifest, possibly empty
    pub version: String,
    /// Ecosystem-defined category such as "prod", "dev" or "indirect"
    pub category: String,
}

impl DeclaredDependency {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            category: category.into(),
        }
    }
}

/// Result of extracting one manifest file.
///
/// `ecosystem` is `None` only when the basename matched no manifest table
/// entry, in which case `result` carries an unsupported-file error.
#[derive(Debug)]
pub struct ManifestParseOutcome {
    pub path: PathBuf,
    pub ecosystem: Option<Ecosystem>,
    pub result: Result<Vec<DeclaredDependency>, ScanError>,
}

impl ManifestParseOutcome {
    /// Successful extraction
    pub fn parsed(path: PathBuf, ecosystem: Ecosystem, dependencies: Vec<DeclaredDependency>) -> Self {
        Self {
            path,
            ecosystem: Some(ecosystem),
            result: Ok(dependencies),
        }
    }

    /// Failed read, unsupported file or malformed content
    pub fn failed(path: PathBuf, ecosystem: Option<Ecosystem>, error: ScanError) -> Self {
        Self {
            path,
            ecosystem,
            result: Err(error),
        }
    }

    pub fn is_err(&self) -> bool {
        self.result.is_err()
    }
}

/// One declared dependency denormalised with its owning file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlatDependencyRecord {
    pub name: String,
    pub version: String,
    pub category: String,
    pub path: String,
    pub packaging: String,
}

impl FlatDependencyRecord {
    /// Build a record from a declared dependency and the file it came from
    pub fn from_declared(dependency: &DeclaredDependency, path: &str, ecosystem: Ecosystem) -> Self {
        Self {
            name: dependency.name.clone(),
            version: dependency.version.clone(),
            category: dependency.category.clone(),
            path: path.to_string(),
            packaging: ecosystem.tag().to_string(),
        }
    }
}

/// Dependencies sharing (name, category, packaging), with occurrence count
/// and the semantic version bounds observed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AggregatedDependencyRecord {
    pub name: String,
    pub min_version: String,
    pub max_version: String,
    pub count: usize,
    pub category: String,
    pub packaging: String,
}
