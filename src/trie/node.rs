//! Node implementation for the keytrie.
//!
//! Nodes are the building blocks of the trie: each one holds an optional
//! value and owns its children outright, keyed by the next symbol of a key.
//!
//! Every symbol of a key adds one level of nesting, so `Drop` and `Clone`
//! walk the tree with an explicit stack rather than recursing per level.

use std::fmt;
use std::mem;

use fnv::FnvBuildHasher;
use hashbrown::hash_map;
use hashbrown::HashMap;

/// Child table of a node, keyed by symbol.
pub(crate) type Children<V> = HashMap<char, TrieNode<V>, FnvBuildHasher>;

/// A node in the trie.
///
/// The node itself carries no symbol; the edge leading to it is labelled by
/// its key in the parent's `children` table.
pub(crate) struct TrieNode<V> {
    /// Map of symbols to child nodes
    pub children: Children<V>,

    /// Value of the key terminating here, if any
    pub value: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::with_value(None)
    }

    fn with_value(value: Option<V>) -> Self {
        Self {
            children: Children::default(),
            value,
        }
    }

    /// Follows `path` symbol by symbol, returning the node it ends at.
    pub fn descend(&self, path: &str) -> Option<&TrieNode<V>> {
        path.chars().try_fold(self, |node, symbol| node.children.get(&symbol))
    }

    /// Mutable counterpart of [`descend`](Self::descend). Never creates
    /// nodes.
    pub fn descend_mut(&mut self, path: &str) -> Option<&mut TrieNode<V>> {
        path.chars()
            .try_fold(self, |node, symbol| node.children.get_mut(&symbol))
    }

    /// Follows `path`, creating any missing nodes along the way.
    pub fn descend_or_insert(&mut self, path: &str) -> &mut TrieNode<V> {
        path.chars().fold(self, |node, symbol| {
            node.children.entry(symbol).or_insert_with(TrieNode::new)
        })
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for TrieNode<V> {
    fn drop(&mut self) {
        // Detach every descendant before it is dropped, so each node dies
        // with an empty child table.
        let mut pending: Vec<TrieNode<V>> = mem::take(&mut self.children)
            .into_values()
            .collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(mem::take(&mut node.children).into_values());
        }
    }
}

/// A node copy under construction during [`TrieNode::clone`].
struct CloneFrame<'a, V> {
    symbol: char,
    pending: hash_map::Iter<'a, char, TrieNode<V>>,
    copy: TrieNode<V>,
}

impl<V: Clone> Clone for TrieNode<V> {
    fn clone(&self) -> Self {
        let mut root = TrieNode::with_value(self.value.clone());
        let mut root_pending = self.children.iter();
        let mut stack: Vec<CloneFrame<'_, V>> = Vec::new();

        loop {
            let next = match stack.last_mut() {
                Some(frame) => frame.pending.next(),
                None => root_pending.next(),
            };

            if let Some((symbol, child)) = next {
                stack.push(CloneFrame {
                    symbol: *symbol,
                    pending: child.children.iter(),
                    copy: TrieNode::with_value(child.value.clone()),
                });
                continue;
            }

            // Current frame is complete; hand it to its parent.
            let Some(done) = stack.pop() else {
                return root;
            };
            let parent = match stack.last_mut() {
                Some(frame) => &mut frame.copy,
                None => &mut root,
            };
            parent.children.insert(done.symbol, done.copy);
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for TrieNode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("value", &self.value)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descend_or_insert_reuses_path() {
        let mut root: TrieNode<u32> = TrieNode::new();
        root.descend_or_insert("abc").value = Some(1);
        root.descend_or_insert("abd").value = Some(2);

        assert_eq!(root.children.len(), 1);
        let b = root.descend("ab").unwrap();
        assert_eq!(b.children.len(), 2);
        assert!(b.value.is_none());
    }

    #[test]
    fn test_descend_missing_path() {
        let mut root: TrieNode<u32> = TrieNode::new();
        root.descend_or_insert("abc");

        assert!(root.descend("abd").is_none());
        assert!(root.descend_mut("x").is_none());
        assert!(root.descend("").is_some());
    }

    #[test]
    fn test_clone_copies_every_branch() {
        let mut root: TrieNode<u32> = TrieNode::new();
        root.value = Some(0);
        root.descend_or_insert("ab").value = Some(1);
        root.descend_or_insert("abc").value = Some(2);
        root.descend_or_insert("b").value = Some(3);

        let copy = root.clone();
        root.descend_mut("ab").unwrap().value = Some(10);

        assert_eq!(copy.value, Some(0));
        assert_eq!(copy.descend("ab").unwrap().value, Some(1));
        assert_eq!(copy.descend("abc").unwrap().value, Some(2));
        assert_eq!(copy.descend("b").unwrap().value, Some(3));
        assert!(copy.descend("a").unwrap().value.is_none());
        assert_eq!(copy.children.len(), 2);
    }

    #[test]
    fn test_debug_lists_child_symbols_only() {
        let mut root: TrieNode<u32> = TrieNode::new();
        root.descend_or_insert("xyz").value = Some(7);

        let rendered = format!("{root:?}");
        assert_eq!(rendered, "TrieNode { value: None, children: ['x'] }");
    }

    #[test]
    fn test_deep_chain_drop_and_clone() {
        let key = "n".repeat(100_000);

        // A small stack makes any per-level recursion overflow.
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(move || {
                let mut root: TrieNode<u32> = TrieNode::new();
                root.descend_or_insert(&key).value = Some(1);

                let copy = root.clone();
                drop(root);
                assert_eq!(copy.descend(&key).and_then(|n| n.value), Some(1));
            })
            .unwrap();
        handle.join().unwrap();
    }
}
