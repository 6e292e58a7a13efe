//! Supported ecosystems and their manifest files

use crate::error::Result;
use crate::models::dependency::DeclaredDependency;
use crate::parsers;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A packaging ecosystem with exactly one recognised manifest filename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Node,
    Dart,
    Go,
    Python,
}

/// Manifest filename to ecosystem lookup table
pub const MANIFESTS: &[(&str, Ecosystem)] = &[
    ("package.json", Ecosystem::Node),
    ("pubspec.yaml", Ecosystem::Dart),
    ("go.mod", Ecosystem::Go),
    ("requirements.txt", Ecosystem::Python),
];

/// Alternative names accepted in include lists
const ALIASES: &[(&str, Ecosystem)] = &[
    ("js", Ecosystem::Node),
    ("ts", Ecosystem::Node),
    ("javascript", Ecosystem::Node),
    ("typescript", Ecosystem::Node),
    ("npm", Ecosystem::Node),
    ("flutter", Ecosystem::Dart),
    ("golang", Ecosystem::Go),
    ("py", Ecosystem::Python),
    ("pip", Ecosystem::Python),
];

impl Ecosystem {
    /// All supported ecosystems
    pub const ALL: [Ecosystem; 4] = [
        Ecosystem::Node,
        Ecosystem::Dart,
        Ecosystem::Go,
        Ecosystem::Python,
    ];

    /// Tag used as the `packaging` value of records
    pub fn tag(&self) -> &'static str {
        match self {
            Ecosystem::Node => "node",
            Ecosystem::Dart => "dart",
            Ecosystem::Go => "go",
            Ecosystem::Python => "python",
        }
    }

    /// Canonical manifest filename
    pub fn manifest_name(&self) -> &'static str {
        match self {
            Ecosystem::Node => "package.json",
            Ecosystem::Dart => "pubspec.yaml",
            Ecosystem::Go => "go.mod",
            Ecosystem::Python => "requirements.txt",
        }
    }

    /// Exact, case-sensitive lookup of a file basename in the manifest table
    pub fn from_manifest_name(file_name: &str) -> Option<Ecosystem> {
        MANIFESTS
            .iter()
            .find(|(name, _)| *name == file_name)
            .map(|(_, ecosystem)| *ecosystem)
    }

    /// Resolve an include token (tag or alias, any case) to an ecosystem.
    ///
    /// Unknown tokens resolve to nothing, which callers treat as "matches no
    /// manifest" rather than as an error.
    pub fn resolve(token: &str) -> Option<Ecosystem> {
        let token = token.trim().to_lowercase();

        if let Some(ecosystem) = Ecosystem::ALL.iter().find(|e| e.tag() == token) {
            return Some(*ecosystem);
        }

        ALIASES
            .iter()
            .find(|(alias, _)| *alias == token)
            .map(|(_, ecosystem)| *ecosystem)
    }

    /// Run this ecosystem's extractor over raw manifest bytes
    pub fn extract(&self, content: &[u8]) -> Result<Vec<DeclaredDependency>> {
        match self {
            Ecosystem::Node => parsers::package_json::extract(content),
            Ecosystem::Dart => parsers::pubspec::extract(content),
            Ecosystem::Go => parsers::go_mod::extract(content),
            Ecosystem::Python => parsers::requirements::extract(content),
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
