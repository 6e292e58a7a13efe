//! Configuration file and environment variable sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{Result, ScanError};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".depwalker.toml";

/// Default environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "DEPWALKER";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 10,
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 10,
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(ScanError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn is_required(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

/// Variable suffixes read by [`EnvConfig`]
const ENV_KEYS: &[&str] = &["PATHS", "INCLUDE", "EXCLUDE", "FORMAT", "AGGREGATE", "WORKERS"];

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 20,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn list(&self, key: &str) -> Option<Vec<String>> {
        self.var(key).map(|value| {
            value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            paths: self
                .list("PATHS")
                .map(|paths| paths.into_iter().map(PathBuf::from).collect()),
            includes: self.list("INCLUDE"),
            excludes: self.list("EXCLUDE"),
            ..Default::default()
        };

        if let Some(format) = self.var("FORMAT") {
            let format = format.parse().map_err(|_| ScanError::InvalidOutputFormat { format })?;
            settings.output_format = Some(format);
        }

        if let Some(aggregate) = self.var("AGGREGATE") {
            settings.aggregate = Some(matches!(
                aggregate.trim().to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ));
        }

        if let Some(workers) = self.var("WORKERS") {
            let workers = workers.trim().parse().map_err(|_| {
                ScanError::config_error(format!(
                    "{}_WORKERS must be a positive integer, got '{}'",
                    self.prefix, workers
                ))
            })?;
            settings.workers = Some(workers);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
