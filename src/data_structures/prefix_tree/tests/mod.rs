//! Unit and property-based tests for the prefix tree.
