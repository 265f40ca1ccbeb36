//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values using Figment.

use crate::config::QuiverConfig;
use crate::constants::{CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_FILENAME};
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use quiver_domain::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Later sources override earlier ones:
    /// 1. Default values from `QuiverConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables (e.g., `QUIVER__VALIDATOR__PRIVATE_MEMBER_VALIDATION`)
    pub fn load(&self) -> Result<QuiverConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(QuiverConfig::default()));

        let config_path = self
            .config_path
            .clone()
            .or_else(Self::find_default_config_path);
        if let Some(path) = config_path {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                log_config_loaded(&path, true);
            } else {
                log_config_loaded(&path, false);
            }
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let config: QuiverConfig = figment.extract().map_err(|e| {
            Error::configuration_with_source("Failed to extract configuration", e)
        })?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &QuiverConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config).map_err(|e| {
            Error::configuration_with_source("Failed to serialize config to TOML", e)
        })?;
        std::fs::write(path.as_ref(), toml_string)
            .map_err(|e| Error::configuration_with_source("Failed to write config file", e))
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let candidate = env::current_dir().ok()?.join(DEFAULT_CONFIG_FILENAME);
        candidate.exists().then_some(candidate)
    }
}

/// Validate configuration values
fn validate_config(config: &QuiverConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    Ok(())
}
