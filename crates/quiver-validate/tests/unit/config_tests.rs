//! Tests for configuration loading
//!
//! Each test that touches the environment uses its own variable prefix so
//! tests can run in parallel.

use quiver_domain::{Error, Severity};
use quiver_validate::logging::parse_log_level;
use quiver_validate::{ConfigLoader, LoggingConfig, QuiverConfig, ValidatorOptions};
use std::env;
use std::fs;
use tempfile::TempDir;
use tracing::Level;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("quiver.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn test_defaults() {
    let config = QuiverConfig::default();

    assert_eq!(config.validator.private_member_validation, Severity::Error);
    assert_eq!(config.validator.static_member_validation, Severity::Error);
    assert!(!config.validator.ignore_private_and_static_injection_for_component);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
}

#[test]
fn test_load_without_file_uses_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let loader = ConfigLoader::new()
        .with_config_path(dir.path().join("missing.toml"))
        .with_env_prefix("QUIVER_TEST_DEFAULTS");

    let config = loader.load().expect("defaults load");

    assert_eq!(config, QuiverConfig::default());
}

#[test]
fn test_load_from_toml_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        r#"
[validator]
private_member_validation = "warning"
ignore_private_and_static_injection_for_component = true

[logging]
level = "debug"
"#,
    );
    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("QUIVER_TEST_TOML");

    let config = loader.load().expect("toml load");

    assert_eq!(config.validator.private_member_validation, Severity::Warning);
    assert_eq!(config.validator.static_member_validation, Severity::Error);
    assert!(config.validator.ignore_private_and_static_injection_for_component);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

#[test]
fn test_environment_overrides_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        r#"
[validator]
static_member_validation = "warning"
"#,
    );
    // SAFETY: the variable name is unique to this test
    unsafe {
        env::set_var("QUIVER_TEST_ENV__VALIDATOR__STATIC_MEMBER_VALIDATION", "note");
    }
    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("QUIVER_TEST_ENV");

    let config = loader.load();

    // SAFETY: the variable name is unique to this test
    unsafe {
        env::remove_var("QUIVER_TEST_ENV__VALIDATOR__STATIC_MEMBER_VALIDATION");
    }
    let config = config.expect("env load");
    assert_eq!(config.validator.static_member_validation, Severity::Note);
}

#[test]
fn test_invalid_severity_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        r#"
[validator]
private_member_validation = "fatal"
"#,
    );
    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("QUIVER_TEST_BAD_SEVERITY");

    assert!(matches!(loader.load(), Err(Error::Configuration { .. })));
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        r#"
[logging]
level = "loud"
"#,
    );
    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("QUIVER_TEST_BAD_LEVEL");

    assert!(matches!(loader.load(), Err(Error::Configuration { .. })));
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("saved.toml");
    let config = QuiverConfig {
        validator: ValidatorOptions {
            private_member_validation: Severity::Warning,
            static_member_validation: Severity::Note,
            ignore_private_and_static_injection_for_component: true,
        },
        logging: LoggingConfig {
            level: "trace".to_string(),
            json_format: true,
        },
    };
    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("QUIVER_TEST_SAVE");

    loader.save_to_file(&config, &path).expect("save");
    let reloaded = loader.load().expect("reload");

    assert_eq!(reloaded, config);
}

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("DEBUG").expect("valid"), Level::DEBUG);
    assert_eq!(parse_log_level("warning").expect("valid"), Level::WARN);
    assert!(parse_log_level("verbose").is_err());
}
