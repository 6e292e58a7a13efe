//! Path filtering predicates
//!
//! Decides whether a filesystem entry is in scope for a scan: its filename
//! must be the manifest of an included ecosystem, and its full path must not
//! contain any of the excluded substrings.

use crate::models::ecosystem::{Ecosystem, MANIFESTS};
use std::collections::HashSet;
use std::path::Path;

/// Precomputed include and exclude rules for one scan
#[derive(Debug, Clone)]
pub struct PathFilter {
    /// Lowercased manifest filenames allowed by the include list
    allowed: HashSet<String>,
    excludes: Vec<String>,
}

impl PathFilter {
    /// Build a filter from include tokens (ecosystem tags or aliases) and
    /// exclude substrings. An empty include list allows every manifest.
    pub fn new(includes: &[String], excludes: &[String]) -> Self {
        Self {
            allowed: allowed_manifests(includes),
            excludes: excludes.to_vec(),
        }
    }

    /// Case-insensitive check of a file basename against the allowed manifests
    pub fn is_included(&self, file_name: &str) -> bool {
        self.allowed.contains(&file_name.to_lowercase())
    }

    /// Literal, case-sensitive substring check against the full path
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.excludes.is_empty() {
            return false;
        }
        let path = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|exclude| path.contains(exclude.as_str()))
    }

    /// Whether no manifest filename can pass the include rules
    pub fn allows_nothing(&self) -> bool {
        self.allowed.is_empty()
    }
}

fn allowed_manifests(includes: &[String]) -> HashSet<String> {
    if includes.is_empty() {
        return MANIFESTS
            .iter()
            .map(|(name, _)| name.to_lowercase())
            .collect();
    }

    includes
        .iter()
        .filter_map(|token| {
            let resolved = Ecosystem::resolve(token);
            if resolved.is_none() {
                log::debug!("Include token '{}' matches no supported ecosystem", token);
            }
            resolved
        })
        .map(|ecosystem| ecosystem.manifest_name().to_lowercase())
        .collect()
}

/// Whether `file_name` is a manifest of one of the `includes` ecosystems
pub fn is_file_required(file_name: &str, includes: &[String]) -> bool {
    PathFilter::new(includes, &[]).is_included(file_name)
}

/// Whether `path` contains any of the `excludes` substrings
pub fn is_path_excluded(path: &Path, excludes: &[String]) -> bool {
    excludes
        .iter()
        .any(|exclude| path.to_string_lossy().contains(exclude.as_str()))
}
