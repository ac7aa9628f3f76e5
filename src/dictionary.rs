//! Word list loading.
//!
//! Reads newline separated word lists into a [`PrefixTree`]. Every kept line
//! is handed to [`PrefixTree::add`] unchanged apart from optional trimming, so
//! the tree sees exactly the characters in the file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::config::DictionaryConfig;
use crate::data_structures::prefix_tree::PrefixTree;
use crate::error::dictionary::DictionaryError;

/// Counters describing one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read from the source
    pub lines_read: usize,

    /// Words that were new to the tree
    pub words_added: usize,

    /// Words that were already in the tree
    pub duplicates: usize,

    /// Blank and comment lines
    pub skipped: usize,
}

/// Reads words from `reader` into a fresh tree.
pub fn load_words<R: BufRead>(
    reader: R,
    config: &DictionaryConfig,
) -> Result<(PrefixTree, LoadStats), std::io::Error> {
    let mut tree = PrefixTree::new();
    let stats = load_words_into(&mut tree, reader, config)?;
    Ok((tree, stats))
}

/// Reads words from `reader` into an existing tree.
///
/// Blank lines and lines starting with the configured comment prefix are
/// skipped. Line terminators (`\n` or `\r\n`) are never part of a word.
///
/// Loading is not transactional: if reading fails part way through, the words
/// before the failing line stay in `tree` and only the error is returned.
pub fn load_words_into<R: BufRead>(
    tree: &mut PrefixTree,
    reader: R,
    config: &DictionaryConfig,
) -> Result<LoadStats, std::io::Error> {
    let mut stats = LoadStats::default();

    for line in reader.lines() {
        let line = line?;
        stats.lines_read += 1;

        let word = if config.trim_whitespace {
            line.trim()
        } else {
            line.as_str()
        };

        let is_comment = config
            .comment_prefix
            .as_deref()
            .is_some_and(|prefix| word.starts_with(prefix));
        if word.is_empty() || is_comment {
            stats.skipped += 1;
            continue;
        }

        let before = tree.size();
        tree.add(word);
        if tree.size() > before {
            stats.words_added += 1;
        } else {
            stats.duplicates += 1;
        }
    }

    Ok(stats)
}

/// Loads the word list at `path` into `tree`.
///
/// A read failure after the file was opened (for example invalid UTF-8) is
/// reported as [`DictionaryError::Io`], and words read before it remain in
/// `tree`, as with [`load_words_into`].
pub fn load_dictionary_file<P: AsRef<Path>>(
    tree: &mut PrefixTree,
    path: P,
    config: &DictionaryConfig,
) -> Result<LoadStats, DictionaryError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading dictionary");

    let file = File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => DictionaryError::NotFound(path.to_path_buf()),
        _ => DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let stats = load_words_into(tree, BufReader::new(file), config).map_err(|source| {
        DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!(
        path = %path.display(),
        lines = stats.lines_read,
        added = stats.words_added,
        duplicates = stats.duplicates,
        skipped = stats.skipped,
        "Dictionary loaded"
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_load_skips_blank_and_comment_lines() {
        let input = "# fruits\napple\n\n  banana  \r\napple\n";
        let (tree, stats) = load_words(Cursor::new(input), &DictionaryConfig::default()).unwrap();

        assert_eq!(tree.size(), 2);
        assert!(tree.contains("apple"));
        assert!(tree.contains("banana"));
        assert_eq!(
            stats,
            LoadStats {
                lines_read: 5,
                words_added: 2,
                duplicates: 1,
                skipped: 2,
            }
        );
    }

    #[test]
    fn test_load_without_trimming_keeps_spaces() {
        let config = DictionaryConfig {
            trim_whitespace: false,
            comment_prefix: None,
            ..Default::default()
        };
        let (tree, _) = load_words(Cursor::new(" pad\n#tag\r\n"), &config).unwrap();

        assert!(tree.contains(" pad"));
        assert!(tree.contains("#tag"));
        assert!(!tree.contains("pad"));
    }
}
