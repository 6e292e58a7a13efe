//! Configuration management
//!
//! Settings are layered: built-in defaults, then a TOML file, then
//! `DEPWALKER_*` environment variables, then command-line arguments.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};

pub use cli::{CliArgs, CliConfig};
pub use file::{EnvConfig, FileConfig, DEFAULT_CONFIG_FILE, DEFAULT_ENV_PREFIX};
pub use parser::{create_default_config, find_default_config, parse_config_content, parse_config_file};
pub use settings::SettingsValidator;

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;

    /// Get the priority of this source (higher numbers take precedence)
    fn priority(&self) -> u8 {
        10
    }

    /// Whether an unavailable source is an error rather than skipped
    fn is_required(&self) -> bool {
        false
    }
}

/// Configuration builder for merging multiple sources
#[derive(Default)]
pub struct ConfigBuilder {
    partial: PartialSettings,
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a partial configuration directly. Direct merges form the base
    /// layer under every registered source; later merges win.
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Register a source; sources are applied by ascending priority
    pub fn add_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Load every source in priority order, then validate the result
    pub fn build(self) -> Result<Settings> {
        let Self {
            mut partial,
            mut sources,
        } = self;
        sources.sort_by_key(|source| source.priority());

        for source in &sources {
            if !source.is_available() && !source.is_required() {
                log::trace!("Skipping unavailable {}", source.name());
                continue;
            }

            log::debug!("Loading settings from {} (priority {})", source.name(), source.priority());
            partial.merge_from(source.load()?);
        }

        let settings = partial.to_settings();
        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

/// Load configuration from every source with the default environment prefix
pub fn load_config(cli_args: CliArgs) -> Result<Settings> {
    load_config_with_env_prefix(cli_args, DEFAULT_ENV_PREFIX)
}

/// Load configuration with a custom environment variable prefix
pub fn load_config_with_env_prefix(cli_args: CliArgs, env_prefix: &str) -> Result<Settings> {
    let file = match &cli_args.config {
        Some(path) => Some(FileConfig::with_path(path)),
        None => find_default_config().map(FileConfig::with_path),
    };

    let mut builder = ConfigBuilder::new()
        .add_source(CliConfig::new(cli_args))
        .add_source(EnvConfig::new(env_prefix));
    if let Some(file) = file {
        builder = builder.add_source(file);
    }

    builder.build()
}
