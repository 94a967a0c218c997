/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use transcript_vtt::app_config::{Config, LogLevel};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.output_extension, "vtt");
    assert!(config.warn_on_overlap);
    assert!(config.validate().is_ok());
    assert!(config.timecode_config().check_overlaps);
}

#[test]
fn test_config_validation_withBadExtensions_shouldFail() {
    let mut config = Config::default();

    config.output_extension = String::new();
    assert!(config.validate().is_err());

    config.output_extension = ".vtt".to_string();
    assert!(config.validate().is_err());

    config.output_extension = "sub/vtt".to_string();
    assert!(config.validate().is_err());

    config.output_extension = "JSON".to_string();
    assert!(config.validate().is_err());

    config.output_extension = "webvtt".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_withPartialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", r#"{"log_level":"debug"}"#)?;

    let config = Config::load(&path)?;

    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.output_extension, "vtt");
    assert!(config.warn_on_overlap);
    Ok(())
}

#[test]
fn test_load_withInvalidValues_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let bad_level = common::create_test_file(temp_dir.path(), "a.json", r#"{"log_level":"loud"}"#)?;
    let bad_ext = common::create_test_file(temp_dir.path(), "b.json", r#"{"output_extension":""}"#)?;

    assert!(Config::load(&bad_level).is_err());
    assert!(Config::load(&bad_ext).is_err());
    assert!(Config::load(temp_dir.path().join("missing.json")).is_err());
    Ok(())
}

#[test]
fn test_config_serialization_roundTrip_shouldPreserveValues() -> Result<()> {
    let config = Config {
        log_level: LogLevel::Warn,
        output_extension: "webvtt".to_string(),
        warn_on_overlap: false,
    };

    let json = serde_json::to_string(&config)?;
    assert!(json.contains("\"warn\""));
    let decoded: Config = serde_json::from_str(&json)?;
    assert_eq!(decoded, config);
    Ok(())
}
