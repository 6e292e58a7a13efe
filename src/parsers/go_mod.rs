//! go.mod dependency extraction

use crate::error::Result;
use crate::models::dependency::DeclaredDependency;

/// Extract `require` directives from go.mod content.
///
/// Both the single-line form and `require ( ... )` blocks are recognised.
/// Requirements marked `// indirect` get the `indirect` category. Lines that
/// do not split into a module path and a version are skipped.
pub fn extract(content: &[u8]) -> Result<Vec<DeclaredDependency>> {
    let text = String::from_utf8_lossy(content);
    let mut deps = Vec::new();
    let mut in_require_block = false;

    for raw_line in text.lines() {
        let line = raw_line.trim();

        if !in_require_block && is_block_opener(line) {
            in_require_block = true;
            continue;
        }
        if in_require_block && line.starts_with(')') {
            in_require_block = false;
            continue;
        }

        let requirement = if in_require_block {
            line
        } else if let Some(rest) = line.strip_prefix("require ") {
            rest.trim()
        } else {
            continue;
        };

        if let Some(dep) = parse_requirement(requirement) {
            deps.push(dep);
        }
    }

    Ok(deps)
}

fn is_block_opener(line: &str) -> bool {
    line.strip_prefix("require")
        .map(|rest| rest.trim() == "(")
        .unwrap_or(false)
}

fn parse_requirement(requirement: &str) -> Option<DeclaredDependency> {
    let (spec, comment) = match requirement.find("//") {
        Some(idx) => (&requirement[..idx], Some(requirement[idx + 2..].trim())),
        None => (requirement, None),
    };

    let category = match comment {
        Some(comment) if comment.split(';').any(|part| part.trim() == "indirect") => "indirect",
        _ => "prod",
    };

    let mut fields = spec.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(module), Some(version), None) => Some(DeclaredDependency::new(module, version, category)),
        _ => None,
    }
}
