//! Lazy iterators over trie entries.
//!
//! Traversal is depth-first over an explicit stack, so deep keys never
//! recurse on the call stack. Yield order is unspecified.

use super::node::TrieNode;

/// An iterator over `(key, &value)` pairs of a trie, or of the subtree below
/// a prefix.
#[derive(Debug)]
pub struct Iter<'a, V> {
    stack: Vec<(String, &'a TrieNode<V>)>,
}

impl<'a, V> Iter<'a, V> {
    /// Starts a traversal at `node`, whose full key is `key`.
    pub(crate) fn new(key: String, node: &'a TrieNode<V>) -> Self {
        Self {
            stack: vec![(key, node)],
        }
    }

    /// An iterator that yields nothing.
    pub(crate) fn empty() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((mut key, node)) = self.stack.pop() {
            let mut children = node.children.iter();
            // A valueless node hands its key buffer to one child, so a long
            // chain of interior nodes is walked without copying the key.
            let reuse = match node.value {
                Some(_) => None,
                None => children.next(),
            };

            for (symbol, child) in children {
                let mut child_key = String::with_capacity(key.len() + symbol.len_utf8());
                child_key.push_str(&key);
                child_key.push(*symbol);
                self.stack.push((child_key, child));
            }

            if let Some(value) = node.value.as_ref() {
                return Some((key, value));
            }
            if let Some((symbol, child)) = reuse {
                key.push(*symbol);
                self.stack.push((key, child));
            }
        }
        None
    }
}

/// An iterator over the keys of a trie.
#[derive(Debug)]
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Keys<'a, V> {
    pub(crate) fn new(inner: Iter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<V> Iterator for Keys<'_, V> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

/// An iterator over the values of a trie.
#[derive(Debug)]
pub struct Values<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(inner: Iter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}
