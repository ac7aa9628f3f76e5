//! Test modules for Mauka Autocomplete.
//!
//! This module contains crate-level test suites and the shared fixtures they use:
//! - Configuration loading and validation
//! - Error conversions and messages
//! - Dictionary loading from files
//!
//! Tests for the prefix tree itself live next to it in
//! `data_structures::prefix_tree::tests`.

pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_list_strategy, TestFixture};
