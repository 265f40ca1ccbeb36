//! Configuration
//!
//! Options that grade policy-configurable findings, plus logging settings.
//! Loaded by [`ConfigLoader`] from defaults, `quiver.toml`, and `QUIVER__*`
//! environment variables.

pub mod loader;

pub use loader::ConfigLoader;

use crate::constants::DEFAULT_LOG_LEVEL;
use quiver_domain::Severity;
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuiverConfig {
    #[serde(default)]
    pub validator: ValidatorOptions,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Severity policy for injection-point validation
///
/// Frozen once a validator is built from it; two validators with different
/// options never affect each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorOptions {
    /// Severity of injection into private members and private classes
    #[serde(default = "default_member_validation")]
    pub private_member_validation: Severity,

    /// Severity of injection into static members
    #[serde(default = "default_member_validation")]
    pub static_member_validation: Severity,

    /// Keep the configured severities even when validating for code
    /// generation
    #[serde(default)]
    pub ignore_private_and_static_injection_for_component: bool,
}

fn default_member_validation() -> Severity {
    Severity::Error
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            private_member_validation: default_member_validation(),
            static_member_validation: default_member_validation(),
            ignore_private_and_static_injection_for_component: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable JSON output format
    #[serde(default)]
    pub json_format: bool,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
        }
    }
}
