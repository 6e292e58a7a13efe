//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{Result, ScanError};
use crate::models::config::PartialSettings;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ScanError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| ScanError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| ScanError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(paths) = &settings.paths {
        if paths.iter().any(|p| p.as_os_str().is_empty()) {
            return Err(ScanError::config_error(format!(
                "Invalid empty entry in paths in config file: {}",
                path.display()
            )));
        }
    }

    for (key, tokens) in [("includes", &settings.includes), ("excludes", &settings.excludes)] {
        if let Some(tokens) = tokens {
            if tokens.iter().any(|t| t.trim().is_empty()) {
                return Err(ScanError::config_error(format!(
                    "Empty entry in {} in config file: {}",
                    key,
                    path.display()
                )));
            }
        }
    }

    if settings.workers == Some(0) {
        return Err(ScanError::config_error(format!(
            "Invalid workers 0 in config file: {}. Must be at least 1.",
            path.display()
        )));
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(ScanError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Candidate default config locations, in lookup order
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }
    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("depwalker").join("config.toml"));
    }

    locations
}

/// First default config location that exists
pub fn find_default_config() -> Option<PathBuf> {
    let found = default_config_locations()
        .into_iter()
        .find(|location| location.is_file());
    if let Some(location) = &found {
        log::debug!("Using config file {}", location.display());
    }
    found
}

/// Create a default configuration file at the specified path.
///
/// An existing file is never overwritten.
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        return Err(ScanError::config_error(format!(
            "Refusing to overwrite existing config file: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, include_str!("default_config.toml"))?;

    Ok(())
}
