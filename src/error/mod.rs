//! Error module for keytrie.
//!
//! Trie operations only ever fail with [`TrieError`], which converts into
//! [`KeytrieError`] with `?`. The configuration and logging layers return
//! [`KeytrieError`] directly.

use thiserror::Error;

use crate::trie::TrieError;

pub mod config;

/// Result type alias used throughout keytrie.
pub type KeytrieResult<T> = Result<T, KeytrieError>;

/// Crate-level error.
#[derive(Error, Debug)]
pub enum KeytrieError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A trie lookup failed.
    #[error("Trie error: {0}")]
    Trie(#[from] TrieError),

    /// Configuration could not be rendered as TOML.
    #[error("Serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),

    /// Failures from other libraries that carry no typed error, such as
    /// installing the tracing subscriber.
    #[error("{0}")]
    Custom(String),
}
