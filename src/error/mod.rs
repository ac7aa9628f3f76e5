//! Error module for Mauka Autocomplete.
//!
//! The prefix tree itself is total and never fails. The errors here belong to
//! the layers around it: loading configuration, reading word lists and
//! rendering output.

use thiserror::Error;

pub mod config;
pub mod dictionary;

/// Result type alias used throughout Mauka Autocomplete.
pub type AutocompleteResult<T> = Result<T, AutocompleteError>;

/// Core error enum for Mauka Autocomplete.
#[derive(Error, Debug)]
pub enum AutocompleteError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors occurring while reading a word list.
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] dictionary::DictionaryError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
