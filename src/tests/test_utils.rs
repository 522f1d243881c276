//! Test utilities and fixtures for keytrie.
//!
//! Reusable proptest strategies and a temporary-directory fixture for the
//! configuration tests.

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use std::collections::HashMap;
use tempfile::TempDir;

/// Maximum key length for generated test data.
const MAX_KEY_LENGTH: usize = 12;

/// Maximum number of entries in a generated key map.
const MAX_MAP_ENTRIES: usize = 64;

/// Generate keys over a small alphabet so that generated keys share
/// prefixes often. Includes the empty key.
pub fn key_strategy() -> BoxedStrategy<String> {
    let symbol = prop_oneof![Just('a'), Just('b'), Just('c'), Just('é')];
    proptest::collection::vec(symbol, 0..MAX_KEY_LENGTH)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Generate a map of distinct keys to values.
pub fn key_map_strategy() -> BoxedStrategy<HashMap<String, u32>> {
    proptest::collection::hash_map(key_strategy(), any::<u32>(), 0..MAX_MAP_ENTRIES).boxed()
}

/// Test fixture for tests that write configuration files.
///
/// Environment variables set through the fixture are removed when it is
/// dropped.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
