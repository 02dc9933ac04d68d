use crate::error::{ErrorContext, WellTuneError};
use crate::welltune_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found",
    ));

    match result.context("Failed to read config file") {
        Err(WellTuneError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected WellTuneError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    match option.context("Routine not found") {
        Err(WellTuneError::Unknown(msg)) => assert_eq!(msg, "Routine not found"),
        _ => panic!("Expected WellTuneError::Unknown"),
    }

    assert_eq!(Some(3).context("unused").ok(), Some(3));
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied",
    ));

    match result.with_context(|| format!("Failed to open {}", "/tmp/welltune.md")) {
        Err(WellTuneError::Unknown(msg)) => {
            assert!(msg.contains("Failed to open /tmp/welltune.md"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected WellTuneError::Unknown"),
    }
}

#[test]
fn test_welltune_error_macro() {
    let error = welltune_error!(ConfigError, "no config directory");
    match error {
        WellTuneError::ConfigError(msg) => assert_eq!(msg, "no config directory"),
        _ => panic!("Expected WellTuneError::ConfigError"),
    }

    let error = welltune_error!(InvalidInput, "unknown operation '{}'", "jump");
    match error {
        WellTuneError::InvalidInput(msg) => assert_eq!(msg, "unknown operation 'jump'"),
        _ => panic!("Expected WellTuneError::InvalidInput"),
    }
}

#[test]
fn test_error_display_and_conversions() {
    let io: WellTuneError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
    assert_eq!(io.to_string(), "IO error: disk full");

    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: WellTuneError = json.into();
    assert!(matches!(err, WellTuneError::JsonError(_)));

    let err = WellTuneError::ConfigError("bad theme".to_string());
    assert_eq!(err.to_string(), "Configuration error: bad theme");
}
