//! Prefix Tree for autocompletion.
//!
//! An in-memory trie supporting insertion, exact membership lookup and
//! enumeration of every stored word that starts with a given prefix.
//!
//! # Characters
//!
//! Keys are walked one Rust `char` (Unicode scalar value) at a time. No
//! normalization is applied: a precomposed `"é"` is a single edge while
//! `"e\u{301}"` is two, and the two spellings are distinct words.
//!
//! # Example
//!
//! ```
//! use mauka_autocomplete_lib::data_structures::prefix_tree::PrefixTree;
//!
//! let mut tree = PrefixTree::new();
//! tree.add("cat");
//! tree.add("car");
//! tree.add("dog");
//!
//! assert_eq!(tree.size(), 3);
//! assert!(tree.contains("cat"));
//! assert!(!tree.contains("ca"));
//!
//! let mut words = tree.words_for_prefix("ca");
//! words.sort();
//! assert_eq!(words, vec!["car".to_string(), "cat".to_string()]);
//! ```

mod node;

#[cfg(test)]
mod tests;

use std::collections::btree_map::Entry;
use std::fmt;

pub use node::TreeNode;

/// A prefix tree of words.
///
/// All operations are total: any string, including the empty one, is accepted
/// and none of them can fail. The tree only grows; there is no removal.
///
/// Every walk over the tree is iterative, so words may be arbitrarily long.
#[derive(Default)]
pub struct PrefixTree {
    /// Root sentinel, never marked as a word
    root: TreeNode,

    /// Number of nodes marked as words
    size: usize,

    /// Number of nodes below the root
    node_count: usize,
}

impl PrefixTree {
    /// Creates an empty tree holding only the root node.
    pub fn new() -> Self {
        Self {
            root: TreeNode::root(),
            size: 0,
            node_count: 0,
        }
    }

    /// Adds a word to the tree, creating nodes for characters not yet present.
    ///
    /// Adding a word that is already present has no effect. Adding the empty
    /// string has no effect either, since the root never represents a word.
    pub fn add<W>(&mut self, word: W)
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            node = match node.children.entry(c) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    self.node_count += 1;
                    entry.insert(TreeNode::new(c))
                }
            };
        }

        if !node.is_word {
            node.is_word = true;
            self.size += 1;
        }
    }

    /// Checks whether `word` was previously added.
    ///
    /// A string that is only a prefix of added words is not contained, and the
    /// empty string never is.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.find_node(word.as_ref())
            .is_some_and(|node| node.is_word)
    }

    /// Returns every added word that starts with `prefix`.
    ///
    /// The prefix itself is included when it was added, and the empty prefix
    /// yields every word in the tree. The order of the returned words carries
    /// no meaning; within a subtree descendants are listed before their
    /// ancestor, and siblings in character order.
    pub fn words_for_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let mut words = Vec::new();

        if let Some(node) = self.find_node(prefix) {
            Self::collect_words(node, prefix, &mut words);
        }

        words
    }

    /// Returns the number of distinct words added.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if no word has been added.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Walks the character path of `key`, stopping at the first missing edge.
    fn find_node(&self, key: &str) -> Option<&TreeNode> {
        key.chars().try_fold(&self.root, |node, c| node.child(c))
    }

    /// Depth-first collection of the words below `node`, whose key is `key`.
    ///
    /// Uses an explicit stack and a single key buffer that grows by one
    /// character on the way down and shrinks on the way back up.
    fn collect_words(node: &TreeNode, key: &str, words: &mut Vec<String>) {
        let mut buffer = key.to_string();
        let mut stack = vec![Visit::Enter(node, None)];

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(node, letter) => {
                    if let Some(c) = letter {
                        buffer.push(c);
                    }
                    stack.push(Visit::Leave(node, letter.is_some()));
                    // Reversed so siblings are visited in character order
                    for (c, child) in node.children.iter().rev() {
                        stack.push(Visit::Enter(child, Some(*c)));
                    }
                }
                Visit::Leave(node, pushed) => {
                    if node.is_word {
                        words.push(buffer.clone());
                    }
                    if pushed {
                        buffer.pop();
                    }
                }
            }
        }
    }
}

/// A step of the depth-first walk in `collect_words`.
enum Visit<'a> {
    /// Descend into a node, appending the edge letter to the key
    Enter(&'a TreeNode, Option<char>),
    /// All descendants are done; emit the node and drop its letter if one was appended
    Leave(&'a TreeNode, bool),
}

impl fmt::Debug for PrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixTree")
            .field("size", &self.size)
            .field("node_count", &self.node_count)
            .finish_non_exhaustive()
    }
}

impl<S> Extend<S> for PrefixTree
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add(word);
        }
    }
}

impl<S> FromIterator<S> for PrefixTree
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
