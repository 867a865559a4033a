//! Configuration tests

use claude_usage_line::config::Settings;
use std::env;

/// Environment-driven cases run sequentially in one test to avoid races
#[test]
fn test_settings_from_env() {
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    let settings = Settings::new().unwrap();
    assert_eq!(settings.logging.level, "warn");
    assert_eq!(settings.logging.format, "text");

    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    let settings = Settings::new().unwrap();
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.logging.format, "json");

    // Full filter directives pass through unchanged
    env::set_var("RUST_LOG", "info,hyper=warn");
    let settings = Settings::new().unwrap();
    assert_eq!(settings.logging.level, "info,hyper=warn");

    env::set_var("RUST_LOG", "claude_usage_line=debug");
    let settings = Settings::new().unwrap();
    assert_eq!(settings.logging.level, "claude_usage_line=debug");

    // Unusable values fall back to the defaults
    env::set_var("RUST_LOG", "claude_usage_line=loud");
    env::set_var("LOG_FORMAT", "xml");
    let settings = Settings::new().unwrap();
    assert_eq!(settings.logging.level, "warn");
    assert_eq!(settings.logging.format, "text");

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut settings = Settings::default();
    settings.api.base_url = "ftp://example.com".to_string();
    assert!(settings.validate().is_err());

    let mut settings = Settings::default();
    settings.api.timeout_secs = 0;
    assert!(settings.validate().is_err());

    let mut settings = Settings::default();
    settings.credentials.keychain_service.clear();
    assert!(settings.validate().is_err());
}

#[test]
fn test_environment_does_not_move_endpoint() {
    let settings = Settings::default();
    assert_eq!(settings.api.base_url, "https://api.anthropic.com");
    assert!(settings.credentials.home_dir.is_none());
}
