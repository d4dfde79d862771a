//! Tests for llmstr configuration loading.

#![cfg(feature = "cli")]

use std::io::Write;

use llm_strings::LlmStringsError;
use llm_strings::config::Config;

#[test]
fn loads_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[validate]\nstrict = true\n\n[normalize]\nverbose = true").unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert!(config.validate.strict);
    assert!(config.normalize.verbose);
}

#[test]
fn missing_sections_use_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[validate]\nstrict = true").unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert!(config.validate.strict);
    assert!(!config.normalize.verbose);
}

#[test]
fn explicit_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(matches!(err, LlmStringsError::Configuration(_)));
}

#[test]
fn invalid_toml_is_a_configuration_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[validate\nstrict = ").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, LlmStringsError::Configuration(ref msg) if msg.contains("parse")));
}
