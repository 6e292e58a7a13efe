//! requirements.txt dependency extraction

use crate::error::Result;
use crate::models::dependency::DeclaredDependency;

/// Version specifier operators, longest first so `===` wins over `==`
const OPERATORS: &[&str] = &["===", "==", "~=", ">=", "<=", "!=", ">", "<"];

/// Extract requirements from a pip requirements file.
///
/// `name==version` pins keep the bare version; other specifiers keep the
/// operator so they read as ranges. Direct references (`name @ url`) carry no
/// version. Option lines such as `-r base.txt` and anything that does not
/// start with a name are skipped.
pub fn extract(content: &[u8]) -> Result<Vec<DeclaredDependency>> {
    let text = String::from_utf8_lossy(content);

    Ok(text.lines().filter_map(parse_line).collect())
}

fn parse_line(raw_line: &str) -> Option<DeclaredDependency> {
    let line = strip_comment(raw_line);
    let line = line.split(';').next().unwrap_or("").trim();

    if line.is_empty() || line.starts_with('-') {
        return None;
    }

    let operator = find_operator(line);
    if let Some(at) = line.find('@') {
        if operator.map_or(true, |(idx, _)| at < idx) {
            let name = line[..at].trim();
            return (!name.is_empty()).then(|| DeclaredDependency::new(name, "", "prod"));
        }
    }

    let Some((idx, operator)) = operator else {
        return Some(DeclaredDependency::new(line, "", "prod"));
    };

    let name = line[..idx].trim();
    if name.is_empty() {
        return None;
    }

    let version = if operator == "==" {
        line[idx + operator.len()..].trim().to_string()
    } else {
        line[idx..].split_whitespace().collect::<String>()
    };

    Some(DeclaredDependency::new(name, version, "prod"))
}

/// Drop a `#` comment; inline comments must be preceded by whitespace
fn strip_comment(line: &str) -> &str {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return "";
    }
    match trimmed.find(" #").or_else(|| trimmed.find("\t#")) {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    }
}

/// First position where a specifier operator matches, outside `[extras]`
fn find_operator(line: &str) -> Option<(usize, &'static str)> {
    let mut depth = 0usize;
    for (idx, c) in line.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            _ if depth > 0 => {}
            _ => {
                let rest = &line[idx..];
                if let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(**op)) {
                    return Some((idx, *op));
                }
            }
        }
    }
    None
}
