//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, LogConfig, PointsConfig, ShellConfig, Validate};
use crate::data_structures::letter_trie::{LetterTrie, LetterTrieConfig, MAX_KEY_LENGTH_LIMIT};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = PointsConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.trie.root_label, '+');
    assert_eq!(config.shell.prompt, "trie> ");
    assert_eq!(config.log.level, "warn");
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = PointsConfig::default();

    config.trie.root_label = 'a';
    assert!(config.validate().is_err());

    config.trie.root_label = '(';
    assert!(config.validate().is_err());

    config.trie.root_label = ' ';
    assert!(config.validate().is_err());

    config.trie.root_label = '#';
    assert!(config.validate().is_ok());

    config.trie.max_key_length = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    config.trie.max_key_length = 10;
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.shell.prompt = "two\nlines".to_string();
    assert!(config.validate().is_err());
}

/// Test that the section validators can be used on their own.
#[test]
fn test_section_validation() {
    assert!(LetterTrieConfig::default().validate().is_ok());
    assert!(ShellConfig::default().validate().is_ok());
    assert!(LogConfig::default().validate().is_ok());

    let shell = ShellConfig {
        prompt: String::new(),
    };
    assert!(shell.validate().is_ok());
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_toml_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "points.toml",
            r#"
            [trie]
            root_label = "*"
            max_key_length = 16

            [shell]
            prompt = "> "
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_TOML_FILE").load().unwrap();
    assert_eq!(config.trie.root_label, '*');
    assert_eq!(config.trie.max_key_length, 16);
    assert_eq!(config.shell.prompt, "> ");
    // Untouched sections keep their defaults
    assert_eq!(config.log, LogConfig::default());
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("points.json", r#"{ "log": { "level": "info", "json": true } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_JSON_FILE").load().unwrap();
    assert_eq!(config.log.level, "info");
    assert!(config.log.json);
    assert_eq!(config.trie, LetterTrieConfig::default());
}

/// Test that invalid values in a file are rejected after loading.
#[test]
fn test_load_config_rejects_invalid_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("bad.toml", "[trie]\nroot_label = \"z\"\n")
        .unwrap();

    let result = ConfigLoader::new(Some(&path), "TEST_BAD_FILE").load();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

/// Test that missing files and unknown extensions are reported.
#[test]
fn test_load_config_file_errors() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("missing.toml");
    let result = ConfigLoader::new(Some(&missing), "TEST_MISSING").load();
    assert_eq!(result, Err(ConfigError::FileNotFound(missing)));

    let unknown = fixture.create_file("points.ini", "x = 1").unwrap();
    let result = ConfigLoader::new(Some(&unknown), "TEST_UNKNOWN").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

/// Test that environment variables override defaults.
#[test]
fn test_environment_overrides() {
    let mut fixture = TestFixture::new().unwrap();
    fixture.set_env("TEST_ENV_OVERRIDE__TRIE__MAX_KEY_LENGTH", "12");
    fixture.set_env("TEST_ENV_OVERRIDE__LOG__LEVEL", "error");

    let config = ConfigLoader::new(None::<&str>, "TEST_ENV_OVERRIDE")
        .load()
        .unwrap();
    assert_eq!(config.trie.max_key_length, 12);
    assert_eq!(config.log.level, "error");
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_default_config_serializes_to_toml() {
    let text = toml::to_string_pretty(&PointsConfig::default()).unwrap();
    assert!(text.contains("root_label = \"+\""));

    let parsed: PointsConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, PointsConfig::default());
}

/// Test that the key length limit is bounded above.
#[test]
fn test_max_key_length_upper_bound() {
    let mut trie_config = LetterTrieConfig {
        max_key_length: 1_000_000,
        ..Default::default()
    };
    assert!(matches!(
        trie_config.validate(),
        Err(ConfigError::ValueOutOfRange { key, .. }) if key == "trie.max_key_length"
    ));

    trie_config.max_key_length = MAX_KEY_LENGTH_LIMIT;
    assert!(trie_config.validate().is_ok());

    // The largest accepted limit still renders
    let mut trie = LetterTrie::with_config(trie_config);
    assert!(trie.add("q".repeat(MAX_KEY_LENGTH_LIMIT), 1).unwrap());
    assert_eq!(trie.render().matches('(').count(), MAX_KEY_LENGTH_LIMIT);
}
