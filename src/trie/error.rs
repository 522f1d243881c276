//! Error types for the keytrie.

/// Errors that can occur in trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieError {
    /// The key has no value stored, either because its path does not exist
    /// or because it only names an interior prefix.
    #[error("Key not found: {key}")]
    KeyNotFound {
        /// The key that was looked up.
        key: String,
    },
}

/// Result type for trie operations
pub type TrieResult<T> = Result<T, TrieError>;
