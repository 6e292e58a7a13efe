//! Lenient semantic version parsing and comparison

use crate::error::{Result, ScanError};
use semver::Version;
use std::cmp::Ordering;

/// Parse a manifest version string as a semantic version.
///
/// Accepts a leading `v`/`V` or `=` and pads a one or two component numeric
/// core (`1` -> `1.0.0`, `1.2` -> `1.2.0`). Ranges and other specifiers are
/// rejected.
pub fn parse_lenient(raw: &str) -> Option<Version> {
    normalise(raw).and_then(|candidate| Version::parse(&candidate).ok())
}

/// Parse with the error preserved, for callers that report it
pub fn parse_strict(raw: &str) -> Result<Version> {
    let candidate = normalise(raw).unwrap_or_default();
    Version::parse(&candidate).map_err(|source| ScanError::InvalidVersion {
        version: raw.to_string(),
        source,
    })
}

fn normalise(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let stripped = trimmed
        .strip_prefix(['v', 'V'])
        .or_else(|| trimmed.strip_prefix('='))
        .unwrap_or(trimmed);

    if stripped.is_empty() {
        return None;
    }

    // Split off pre-release and build suffixes before padding the core
    let suffix_start = stripped.find(['-', '+']).unwrap_or(stripped.len());
    let (core, suffix) = stripped.split_at(suffix_start);

    let components: Vec<&str> = core.split('.').collect();
    let numeric = components
        .iter()
        .all(|c| !c.is_empty() && c.bytes().all(|b| b.is_ascii_digit()));

    let padded = match components.len() {
        1 if numeric => format!("{}.0.0", core),
        2 if numeric => format!("{}.0", core),
        _ => core.to_string(),
    };

    Some(format!("{}{}", padded, suffix))
}

/// Precedence ordering, ignoring build metadata
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp_precedence(b)
}

/// Lower of two version strings
pub fn min_version(a: &str, b: &str) -> Result<Version> {
    let (a, b) = (parse_strict(a)?, parse_strict(b)?);
    Ok(if compare(&b, &a) == Ordering::Less { b } else { a })
}

/// Higher of two version strings
pub fn max_version(a: &str, b: &str) -> Result<Version> {
    let (a, b) = (parse_strict(a)?, parse_strict(b)?);
    Ok(if compare(&b, &a) == Ordering::Greater { b } else { a })
}
