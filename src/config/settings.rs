//! Validation of merged settings

use std::path::Path;

use crate::error::{Result, ScanError};
use crate::models::config::Settings;

/// Settings validator run before any scanning starts
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return a critical error if they are unusable
    pub fn validate(settings: &Settings) -> Result<()> {
        if settings.paths.is_empty() {
            return Err(ScanError::config_error(
                "No root path supplied. Pass one or more directories to scan.",
            ));
        }

        if settings.workers == 0 {
            return Err(ScanError::config_error("Workers must be at least 1"));
        }

        if settings.includes.iter().any(|t| t.trim().is_empty()) {
            return Err(ScanError::config_error("Include list contains an empty entry"));
        }

        if settings.excludes.iter().any(|t| t.is_empty()) {
            return Err(ScanError::config_error(
                "Exclude list contains an empty entry, which would exclude every path",
            ));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// The output file's directory must already exist
    fn validate_output_path(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(ScanError::config_error(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )))
            }
            _ => Ok(()),
        }
    }
}
