//! keytrie
//!
//! A prefix trie mapping string keys to values, with exact lookup,
//! overwrite-aware length tracking, enumeration of all keys or of the keys
//! under a prefix, and longest-common-prefix completion.
//!
//! ```
//! use keytrie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.set("hallo", "daar");
//! trie.set("hoe gaan", "dit met jou");
//!
//! assert_eq!(trie["hallo"], "daar");
//! assert_eq!(trie.longest_common_prefix("h"), Some("h".to_string()));
//! assert_eq!(trie.longest_common_prefix("ho"), Some("hoe gaan".to_string()));
//! ```
//!
//! Beyond the container, the crate carries a small ambient layer: a
//! validated configuration loader, typed errors and a tracing subscriber
//! installer.

pub mod config;
pub mod error;
pub mod logging;
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

use std::path::Path;

pub use trie::{Trie, TrieError, TrieResult};

/// Version information for keytrie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads configuration from `config_path` (or the built-in defaults when
/// `None`), applies `KEYTRIE__*` environment overrides and stores the result
/// as the global configuration. Installing a subscriber is left to
/// [`logging::init_logging`].
pub fn init(config_path: Option<&Path>) -> error::KeytrieResult<&'static config::KeytrieConfig> {
    let loaded = config::ConfigLoader::new(config_path, config::ENV_PREFIX)
        .load()
        .map_err(|e| {
            tracing::error!(error = %e, path = ?config_path, "Failed to load configuration");
            e
        })?;

    Ok(config::init_global_config(loaded))
}
