//! Prefix Trie Implementation
//!
//! This module provides an associative container mapping string keys to
//! values. Keys sharing a prefix share the nodes that spell it, which makes
//! enumerating every key below a prefix (for completion, say) a walk over one
//! subtree instead of a scan over the whole key set.
//!
//! # Example
//!
//! ```
//! use keytrie::{Trie, TrieError};
//!
//! let mut trie = Trie::new();
//! trie.set("abc", "def");
//! trie.set("abcde", "234627sdg");
//! trie.set("hallo", "daar");
//!
//! assert_eq!(trie.len(), 3);
//! assert_eq!(trie.get("abc"), Ok(&"def"));
//! assert!(matches!(trie.get("ab"), Err(TrieError::KeyNotFound { .. })));
//!
//! let mut keys = trie.keys_with_prefix("abc");
//! keys.sort();
//! assert_eq!(keys, vec!["abc", "abcde"]);
//! ```

mod error;
mod iter;
mod node;

use std::fmt;
use std::ops::Index;

pub use error::{TrieError, TrieResult};
pub use iter::{Iter, Keys, Values};
use node::TrieNode;

/// A prefix trie mapping string keys to values of type `V`.
///
/// Each key is treated as a sequence of `char` symbols. The empty string is a
/// valid key and lives in the root's value slot.
///
/// Key features:
/// * O(key length) lookup and insertion
/// * Constant-time `len`, kept as a running count
/// * Prefix enumeration and longest-common-prefix completion
/// * Keys of any length: dropping, cloning and iterating never recurse per
///   symbol
///
/// The trie does no internal locking; wrap it in a lock to share it between
/// threads.
#[derive(Clone)]
pub struct Trie<V> {
    /// Node for the empty prefix
    root: TrieNode<V>,

    /// Number of nodes holding a value
    size: usize,
}

impl<V> Trie<V> {
    /// Creates a new empty `Trie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            size: 0,
        }
    }

    /// Retrieves the value stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(&V)` - The stored value.
    /// * `Err(TrieError::KeyNotFound)` - If no value is stored under exactly
    ///   this key, including when `key` is only a prefix of stored keys.
    pub fn get<K>(&self, key: K) -> TrieResult<&V>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        self.get_opt(key).ok_or_else(|| TrieError::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Retrieves the value stored under `key`, or `None` if there is none.
    pub fn get_opt<K>(&self, key: K) -> Option<&V>
    where
        K: AsRef<str>,
    {
        self.root.descend(key.as_ref())?.value.as_ref()
    }

    /// Retrieves a mutable reference to the value stored under `key`.
    pub fn get_mut<K>(&mut self, key: K) -> TrieResult<&mut V>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        self.root
            .descend_mut(key)
            .and_then(|node| node.value.as_mut())
            .ok_or_else(|| TrieError::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Checks whether a value is stored under `key`.
    pub fn contains_key<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.get_opt(key).is_some()
    }

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// Missing nodes along the key's path are created; existing ones are
    /// reused.
    ///
    /// # Returns
    ///
    /// The value previously stored under `key`, if any. The length of the
    /// trie grows only when this is `None`.
    pub fn set<K>(&mut self, key: K, value: V) -> Option<V>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        let node = self.root.descend_or_insert(key);

        let previous = node.value.replace(value);
        if previous.is_none() {
            self.size += 1;
            tracing::trace!(key = %key, size = self.size, "Inserted new key");
        }
        previous
    }

    /// Returns the number of keys holding a value.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if no key holds a value.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every entry from the trie.
    pub fn clear(&mut self) {
        tracing::debug!(size = self.size, "Clearing trie");
        self.root = TrieNode::new();
        self.size = 0;
    }

    /// Returns every stored key, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.keys_with_prefix("")
    }

    /// Returns every stored key starting with `prefix`, in no particular
    /// order.
    ///
    /// A prefix with no stored extensions yields an empty vector. The prefix
    /// itself is included when it is a stored key.
    pub fn keys_with_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        Keys::new(self.iter_prefix(prefix)).collect()
    }

    /// Returns a lazy iterator over all `(key, &value)` pairs.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(String::new(), &self.root)
    }

    /// Returns a lazy iterator over the `(key, &value)` pairs whose key
    /// starts with `prefix`.
    pub fn iter_prefix<P>(&self, prefix: P) -> Iter<'_, V>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        match self.root.descend(prefix) {
            Some(node) => Iter::new(prefix.to_string(), node),
            None => {
                tracing::trace!(prefix = %prefix, "No keys under prefix");
                Iter::empty()
            }
        }
    }

    /// Returns a lazy iterator over all stored values.
    pub fn values(&self) -> Values<'_, V> {
        Values::new(self.iter())
    }

    /// Finds the longest string shared by every stored key that starts with
    /// `prefix`.
    ///
    /// The result always starts with `prefix`; it extends past it for as long
    /// as the matching keys agree. This is what a completer inserts when the
    /// user presses tab.
    ///
    /// # Returns
    ///
    /// * `Some(String)` - The longest common prefix of the matching keys.
    /// * `None` - If no stored key starts with `prefix`.
    pub fn longest_common_prefix<P>(&self, prefix: P) -> Option<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let mut node = self.root.descend(prefix)?;
        let mut common = prefix.to_string();

        while node.value.is_none() && node.children.len() == 1 {
            let (symbol, child) = node.children.iter().next()?;
            common.push(*symbol);
            node = child;
        }

        // Only the root can be valueless and childless.
        if node.value.is_none() && node.children.is_empty() {
            return None;
        }
        Some(common)
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V, K> Extend<(K, V)> for Trie<V>
where
    K: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<V, K> FromIterator<(K, V)> for Trie<V>
where
    K: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<V> Index<&str> for Trie<V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if no value is stored under `key`.
    fn index(&self, key: &str) -> &Self::Output {
        match self.get(key) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
