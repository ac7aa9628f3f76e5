//! Node implementation for the prefix tree.
//!
//! Each node owns its children directly, so the structure is a plain tree
//! with no shared ownership and no back-references. A word of `n` characters
//! is a chain `n` nodes deep, so nothing here may recurse on depth.

use std::collections::BTreeMap;
use std::fmt;

/// A node in the prefix tree.
///
/// Every node except the root represents one character on a path from the root.
/// Nodes flagged with `is_word` terminate a word that was explicitly added.
#[derive(Default)]
pub struct TreeNode {
    /// The character on the edge leading to this node (`None` for the root)
    pub letter: Option<char>,

    /// Child nodes keyed by character, iterated in sorted order
    pub children: BTreeMap<char, TreeNode>,

    /// Whether the path ending at this node is an added word
    pub is_word: bool,
}

impl TreeNode {
    /// Creates the root sentinel, which carries no letter.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a non-word node for `letter`.
    pub fn new(letter: char) -> Self {
        Self {
            letter: Some(letter),
            children: BTreeMap::new(),
            is_word: false,
        }
    }

    /// Returns the child for `letter`, if one exists.
    pub fn child(&self, letter: char) -> Option<&TreeNode> {
        self.children.get(&letter)
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        // Detach descendants onto the heap so each node drops with no children
        let mut pending: Vec<TreeNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("letter", &self.letter)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .field("is_word", &self.is_word)
            .finish()
    }
}
