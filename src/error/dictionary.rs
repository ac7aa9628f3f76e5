//! Dictionary error module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a word list.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The word list file does not exist.
    #[error("Dictionary file not found: {0}")]
    NotFound(PathBuf),

    /// Reading the word list failed part way through.
    #[error("Failed to read dictionary {path}: {source}")]
    Io {
        /// The file being read
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },
}
