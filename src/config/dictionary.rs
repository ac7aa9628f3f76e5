//! Word list configuration module.
//!
//! Controls where the words fed into the prefix tree come from and how each
//! line of a word list is interpreted.

use std::path::PathBuf;

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Word list configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Word list file, one word per line (None to start with an empty tree)
    pub path: Option<PathBuf>,

    /// Lines starting with this prefix are ignored (None to keep every line)
    pub comment_prefix: Option<String>,

    /// Whether to strip surrounding whitespace from each line
    pub trim_whitespace: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            comment_prefix: Some("#".to_string()),
            trim_whitespace: true,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if matches!(self.comment_prefix.as_deref(), Some("")) {
            return Err(ConfigError::ValidationError(
                "comment_prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
