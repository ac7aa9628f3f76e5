//! Mauka Autocomplete Library
//!
//! This library contains a prefix tree for autocompletion together with the
//! layers a host application needs to drive it: word list loading,
//! configuration and error types. The library is designed to be used by the
//! binary crate, but can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::prefix_tree`] is the core and has no dependencies on the
//!   rest of the crate. Its operations are total and never fail.
//! - [`dictionary`] feeds word lists into a tree.
//! - [`config`] and [`error`] provide the ambient configuration and error
//!   handling used by the loaders and the command-line driver.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Mauka Autocomplete.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
