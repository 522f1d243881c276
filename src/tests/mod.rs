//! Test modules for keytrie.
//!
//! Crate-internal suites that need private access or shared fixtures:
//! - Property-based tests of the trie using proptest
//! - Configuration loading and validation tests
//! - Error type and propagation tests
//! - Shared strategies and fixtures

pub mod test_utils;
