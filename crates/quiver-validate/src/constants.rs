//! Configuration and logging defaults

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "quiver.toml";

/// Prefix of configuration environment variables (`QUIVER__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "QUIVER";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Environment variable holding an `EnvFilter` directive that overrides the
/// configured log level
pub const LOG_FILTER_ENV: &str = "QUIVER_LOG";

pub const DEFAULT_LOG_LEVEL: &str = "info";
