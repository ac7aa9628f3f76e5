//! Completion output configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Completion output configuration.
///
/// These settings shape what the command-line driver prints. The prefix tree
/// always returns every match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Maximum number of suggestions to print (None for all)
    pub limit: Option<usize>,

    /// Whether to sort suggestions alphabetically
    pub sorted: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            limit: None,
            sorted: true,
        }
    }
}

impl Validate for CompletionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.limit == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "completion.limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

impl CompletionConfig {
    /// Applies ordering and the limit to a list of suggestions.
    pub fn apply(&self, mut words: Vec<String>) -> Vec<String> {
        if self.sorted {
            words.sort_unstable();
        }
        if let Some(limit) = self.limit {
            words.truncate(limit);
        }
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sorts_and_limits() {
        let config = CompletionConfig {
            limit: Some(2),
            sorted: true,
        };
        let words = vec!["cat".to_string(), "car".to_string(), "cab".to_string()];

        assert_eq!(config.apply(words), vec!["cab", "car"]);
    }

    #[test]
    fn test_apply_without_limit_keeps_everything() {
        let config = CompletionConfig {
            limit: None,
            sorted: false,
        };
        let words = vec!["b".to_string(), "a".to_string()];

        assert_eq!(config.apply(words), vec!["b", "a"]);
    }
}
