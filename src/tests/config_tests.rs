use crate::config::{load_config_from, save_config_to, Config};
use crate::error::WellTuneError;
use crate::session::{SignInPolicy, Theme};
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(&dir.path().join("absent.json")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.theme, Theme::Dark);
    assert_eq!(config.sign_in_policy(), SignInPolicy::SkipOnboarding);
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let config = Config {
        theme: Theme::Light,
        onboarding_after_sign_in: true,
        tick_rate_ms: 250,
    };

    save_config_to(&path, &config).unwrap();
    let loaded = load_config_from(&path).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.sign_in_policy(), SignInPolicy::RequireOnboarding);
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "theme": "light" }"#).unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.theme, Theme::Light);
    assert!(!config.onboarding_after_sign_in);
}

#[test]
fn test_invalid_theme_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "theme": "sepia" }"#).unwrap();

    match load_config_from(&path) {
        Err(WellTuneError::ConfigError(msg)) => assert!(msg.contains("config.json")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}
