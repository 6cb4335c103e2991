//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `PWGEN__<SECTION>__<KEY>` pattern
//!
//! Command line flags take precedence over everything loaded here.

mod generator;

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use generator::GeneratorDefaults;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Defaults for generation flags.
    #[serde(default)]
    pub generator: GeneratorDefaults,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from `./config` and the environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{PWGEN_PROFILE}.toml` (if `PWGEN_PROFILE` is set)
    /// 3. Environment variables with `PWGEN__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Load configuration using `dir` as the configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Load default configuration
            .add_source(File::from(dir.join("default")).required(false));

        // Load profile-specific configuration
        if let Ok(profile) = std::env::var("PWGEN_PROFILE") {
            builder = builder.add_source(File::from(dir.join(&profile)).required(false));
        }

        // Override with environment variables
        // PWGEN__GENERATOR__LENGTH=32 -> generator.length = 32
        let config = builder
            .add_source(
                Environment::with_prefix("PWGEN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Deserialize and validate
        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        match self.observability.log_format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Message(format!(
                "observability.log_format must be \"text\" or \"json\", got \"{other}\""
            ))),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}
