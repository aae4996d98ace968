/*!
 * Tests for app configuration
 */

use polyglotlab::app_config::{Config, InferenceConfig, LogLevel};

use crate::common::create_temp_dir;

/// Test that the default configuration is valid
#[test]
fn test_defaultConfig_shouldValidate() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(
        config.inference.endpoint,
        "https://api-inference.huggingface.co"
    );
    assert_eq!(config.inference.translation_max_length, 512);
    assert_eq!(config.inference.max_new_tokens, 320);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test saving and reloading a configuration
#[test]
fn test_config_saveAndLoad_shouldRoundTrip() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.inference.api_key = "test-token".to_string();
    config.inference.temperature = 0.7;
    config.log_level = LogLevel::Debug;
    config.save(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.inference.api_key, "test-token");
    assert_eq!(loaded.inference.temperature, 0.7);
    assert_eq!(loaded.log_level, LogLevel::Debug);
}

/// Test that a missing config file is created with defaults
#[test]
fn test_loadOrCreate_withMissingFile_shouldCreateDefault() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");

    assert!(!path.exists());
    let config = Config::load_or_create(&path).unwrap();

    assert!(path.exists());
    assert_eq!(
        config.inference.endpoint,
        "https://api-inference.huggingface.co"
    );
}

/// Test that missing fields fall back to defaults
#[test]
fn test_fromFile_withPartialJson_shouldApplyDefaults() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, r#"{"inference": {"api_key": "secret"}}"#).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.inference.api_key, "secret");
    assert_eq!(config.inference.timeout_secs, 120);
    assert!(config.inference.wait_for_model);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that log levels parse from lowercase JSON
#[test]
fn test_fromFile_withLogLevel_shouldParseLowercase() {
    let dir = create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, r#"{"log_level": "trace"}"#).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.log_level, LogLevel::Trace);
    assert_eq!(
        config.log_level.to_level_filter(),
        log::LevelFilter::Trace
    );
}

/// Test endpoint validation
#[test]
fn test_validate_withBadEndpoint_shouldFail() {
    let mut config = Config::default();

    config.inference.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());

    config.inference.endpoint = "ftp://example.com".to_string();
    assert!(config.validate().is_err());
}

/// Test numeric range validation
#[test]
fn test_validate_withOutOfRangeValues_shouldFail() {
    let base = InferenceConfig::default();

    let config = InferenceConfig {
        temperature: 1.5,
        ..base.clone()
    };
    assert!(config.validate().is_err());

    let config = InferenceConfig {
        timeout_secs: 0,
        ..base.clone()
    };
    assert!(config.validate().is_err());

    let config = InferenceConfig {
        max_new_tokens: 0,
        ..base
    };
    assert!(config.validate().is_err());
}
