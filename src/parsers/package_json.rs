//! package.json dependency extraction

use crate::error::{Result, ScanError};
use crate::models::dependency::DeclaredDependency;
use serde_json::{Map, Value};

const MANIFEST: &str = "package.json";

/// Dependency sections and the category each one maps to
const SECTIONS: &[(&str, &str)] = &[
    ("dependencies", "prod"),
    ("devDependencies", "dev"),
    ("peerDependencies", "peer"),
    ("optionalDependencies", "optional"),
];

/// Extract declared dependencies from package.json content.
///
/// Entries are emitted section by section, sorted by name within a section.
/// A value that is not a string (an object, a number) still yields the
/// dependency, with an empty version.
pub fn extract(content: &[u8]) -> Result<Vec<DeclaredDependency>> {
    let json_value: Value =
        serde_json::from_slice(content).map_err(|e| ScanError::json_parse_error(MANIFEST, e))?;

    let obj = match json_value {
        Value::Object(obj) => obj,
        _ => {
            return Err(ScanError::invalid_manifest(
                MANIFEST,
                "Root value is not an object",
            ))
        }
    };

    let mut deps = Vec::new();
    for (section, category) in SECTIONS {
        if let Some(Value::Object(entries)) = obj.get(*section) {
            deps.extend(collect_section(entries, category));
        }
    }

    Ok(deps)
}

fn collect_section(entries: &Map<String, Value>, category: &str) -> Vec<DeclaredDependency> {
    let mut names: Vec<&String> = entries.keys().collect();
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let version = match &entries[name] {
                Value::String(version) => version.as_str(),
                _ => "",
            };
            DeclaredDependency::new(name.as_str(), version, category)
        })
        .collect()
}
