//! Data structures for Mauka Autocomplete.
//!
//! This module contains the in-memory structures that back completion
//! lookups. They are single-threaded and owned by their caller.

pub mod prefix_tree;

// Re-export common data structures
pub use prefix_tree::{PrefixTree, TreeNode};
