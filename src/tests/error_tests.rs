//! Tests for the error module.

use crate::error::config::ConfigError;
use crate::error::dictionary::DictionaryError;
use crate::error::{AutocompleteError, AutocompleteResult};
use std::path::PathBuf;

/// Test that nested errors keep the inner message.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = AutocompleteError::Io(io_error);

    let error_string = format!("{error}");
    assert!(error_string.contains("file not found"));
}

/// Test conversions used by `?` in the loaders and the binary.
#[test]
fn test_from_conversions() {
    fn failing_config() -> AutocompleteResult<()> {
        Err(ConfigError::ValidationError("bad level".to_string()))?
    }
    fn failing_dictionary() -> AutocompleteResult<()> {
        Err(DictionaryError::NotFound(PathBuf::from("words.txt")))?
    }

    match failing_config() {
        Err(AutocompleteError::Config(ConfigError::ValidationError(msg))) => {
            assert_eq!(msg, "bad level")
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(matches!(
        failing_dictionary(),
        Err(AutocompleteError::Dictionary(DictionaryError::NotFound(_)))
    ));
}

/// Test error display strings.
#[test]
fn test_error_display() {
    let err = AutocompleteError::from(DictionaryError::NotFound(PathBuf::from("words.txt")));
    assert_eq!(
        err.to_string(),
        "Dictionary error: Dictionary file not found: words.txt"
    );

    let err = ConfigError::ValueOutOfRange {
        key: "completion.limit".to_string(),
        message: "must be greater than 0".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Configuration value completion.limit is out of valid range: must be greater than 0"
    );

    let err = AutocompleteError::Custom("plain".to_string());
    assert_eq!(err.to_string(), "plain");
}

/// Test that IO failures while reading keep their source.
#[test]
fn test_dictionary_io_source() {
    use std::error::Error;

    let err = DictionaryError::Io {
        path: PathBuf::from("words.txt"),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
    };

    assert!(err.to_string().contains("words.txt"));
    assert!(err.source().is_some());
}
