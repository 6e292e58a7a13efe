//! pubspec.yaml dependency extraction

use crate::error::{Result, ScanError};
use crate::models::dependency::DeclaredDependency;
use serde_yaml::{Mapping, Value};

const MANIFEST: &str = "pubspec.yaml";

const SECTIONS: &[(&str, &str)] = &[
    ("dependencies", "prod"),
    ("dev_dependencies", "dev"),
    ("dependency_overrides", "override"),
];

/// Extract declared dependencies from pubspec.yaml content.
///
/// Hosted dependencies carry their version constraint (a bare number such as
/// `1.0` is kept as written); `sdk`, `path` and `git` dependencies are
/// mappings and yield an empty version.
pub fn extract(content: &[u8]) -> Result<Vec<DeclaredDependency>> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let document: Value =
        serde_yaml::from_slice(content).map_err(|e| ScanError::yaml_parse_error(MANIFEST, e))?;

    let root = match document {
        Value::Mapping(root) => root,
        Value::Null => return Ok(Vec::new()),
        _ => {
            return Err(ScanError::invalid_manifest(
                MANIFEST,
                "Root value is not a mapping",
            ))
        }
    };

    let source = String::from_utf8_lossy(content);
    let mut deps = Vec::new();
    for (section, category) in SECTIONS {
        if let Some(Value::Mapping(entries)) = root.get(*section) {
            deps.extend(collect_section(&source, section, entries, category));
        }
    }

    Ok(deps)
}

fn collect_section(
    source: &str,
    section: &str,
    entries: &Mapping,
    category: &str,
) -> Vec<DeclaredDependency> {
    entries
        .iter()
        .filter_map(|(name, value)| {
            let name = name.as_str()?;
            let version = match value {
                Value::String(version) => version.clone(),
                // Numbers lose trailing zeros once parsed (1.10 -> 1.1)
                Value::Number(number) => raw_scalar(source, section, name)
                    .unwrap_or_else(|| number.to_string()),
                _ => String::new(),
            };
            Some(DeclaredDependency::new(name, version, category))
        })
        .collect()
}

/// Text of `name: <value>` as written, for a direct entry of a top-level
/// block section.
fn raw_scalar(source: &str, section: &str, name: &str) -> Option<String> {
    let mut in_section = false;
    let mut entry_indent = None;

    for line in source.lines() {
        let content = line.trim_start();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let indent = line.len() - content.len();
        if indent == 0 {
            in_section = content
                .split_once(':')
                .is_some_and(|(key, _)| unquote(key.trim_end()) == section);
            entry_indent = None;
            continue;
        }
        if !in_section || *entry_indent.get_or_insert(indent) != indent {
            continue;
        }

        let Some((key, rest)) = content.split_once(':') else {
            continue;
        };
        if unquote(key.trim_end()) != name {
            continue;
        }

        let value = match rest.find(" #") {
            Some(comment) => &rest[..comment],
            None => rest,
        }
        .trim();
        return (!value.is_empty()).then(|| value.to_string());
    }

    None
}

fn unquote(key: &str) -> &str {
    key.trim_matches(|c| c == '"' || c == '\'')
}
