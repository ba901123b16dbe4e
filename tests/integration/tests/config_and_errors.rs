//! Integration tests for configuration loading and error records

use anyhow::Result;
use playerkit::utils::{Config, IntoPlayerError};
use playerkit::{fail, make_error, ErrorRecord, PlayerError};
use playerkit_integration_tests::TestFixture;
use serial_test::serial;

#[test]
fn test_make_error_fields() {
    let record = make_error("net.example", 42, "timeout");
    assert_eq!(record.domain(), "net.example");
    assert_eq!(record.code(), 42);
    assert_eq!(record.message(), "timeout");
}

#[test]
fn test_records_propagate_with_question_mark() {
    fn open(url: &str) -> std::result::Result<(), ErrorRecord> {
        if url.is_empty() {
            return fail("player.decoder", -1, "Invalid URL");
        }
        Ok(())
    }

    fn play(url: &str) -> std::result::Result<&'static str, ErrorRecord> {
        open(url)?;
        Ok("playing")
    }

    assert_eq!(play("file:///a.mp4"), Ok("playing"));
    let err = play("").unwrap_err();
    assert_eq!(err, make_error("player.decoder", -1, "Invalid URL"));
    assert_eq!(err.to_string(), "player.decoder error -1: Invalid URL");
}

#[test]
fn test_player_error_reports_as_record() {
    let result: std::result::Result<u32, _> = "abc".parse::<u32>().input_err("Reading seconds");
    let record = result.unwrap_err().to_record();
    assert_eq!(record.domain(), "playerkit");
    assert_eq!(record.code(), 3);
    assert!(record.message().starts_with("Invalid input: Reading seconds"));
}

#[test]
#[serial]
fn test_config_file_and_env_override() -> Result<()> {
    let fixture = TestFixture::new()?;
    let path = fixture.write_config(
        "[locale]\nlanguage = \"zh-CN\"\n\n[general]\nlog_level = \"warn\"\n",
    )?;

    std::env::remove_var("PLAYERKIT_LOCALE");
    std::env::remove_var("PLAYERKIT_RESOURCE_DIR");
    std::env::remove_var("PLAYERKIT_LOG_LEVEL");

    let config = Config::from_file(&path)?;
    assert_eq!(config.locale.language.as_deref(), Some("zh-CN"));
    assert_eq!(config.general.log_level, "warn");

    std::env::set_var("PLAYERKIT_LOCALE", "en-GB");
    let config = Config::from_file(&path);
    std::env::remove_var("PLAYERKIT_LOCALE");
    assert_eq!(config?.locale.language.as_deref(), Some("en-GB"));

    Ok(())
}

#[test]
#[serial]
fn test_config_rejects_bad_values() -> Result<()> {
    let fixture = TestFixture::new()?;

    let path = fixture.write_config("[general]\nlog_level = \"loud\"\n")?;
    assert!(matches!(Config::from_file(&path), Err(PlayerError::Config(_))));

    let missing = fixture.path().join("missing.toml");
    assert!(matches!(Config::from_file(&missing), Err(PlayerError::NotFound(_))));

    Ok(())
}
