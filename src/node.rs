use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::mem;

use crate::Label;

/// A node in the trie.
///
/// Each node exclusively owns its children; there are no parent links.
pub(crate) struct TrieNode<L: Label> {
    /// label → child, iterated in ascending label order.
    pub(crate) children: BTreeMap<L, TrieNode<L>>,
    /// True if the path from the root to this node spells a stored word.
    pub(crate) is_end: bool,
    /// Number of `is_end` nodes in this subtree, this node included.
    pub(crate) words: usize,
}

impl<L: Label> TrieNode<L> {
    pub(crate) fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            is_end: false,
            words: 0,
        }
    }

    /// Returns true if no stored word passes through this node.
    #[inline]
    pub(crate) fn is_dead(&self) -> bool {
        self.words == 0
    }
}

// Drops the subtree with an explicit stack so very long keys cannot
// overflow the call stack.
impl<L: Label> Drop for TrieNode<L> {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode<L>> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(mem::take(&mut node.children).into_values());
        }
    }
}

/// A node being copied by [`TrieNode::clone`]: the source, its children not
/// yet visited, and the copies of the children already finished.
struct CloneFrame<'a, L: Label> {
    source: &'a TrieNode<L>,
    label: Option<L>,
    pending: btree_map::Iter<'a, L, TrieNode<L>>,
    done: BTreeMap<L, TrieNode<L>>,
}

impl<'a, L: Label> CloneFrame<'a, L> {
    fn new(source: &'a TrieNode<L>, label: Option<L>) -> Self {
        Self {
            source,
            label,
            pending: source.children.iter(),
            done: BTreeMap::new(),
        }
    }
}

// Copies bottom-up with an explicit stack, like `Drop`.
impl<L: Label> Clone for TrieNode<L> {
    fn clone(&self) -> Self {
        let mut stack = vec![CloneFrame::new(self, None)];
        while let Some(frame) = stack.last_mut() {
            if let Some((&label, child)) = frame.pending.next() {
                stack.push(CloneFrame::new(child, Some(label)));
                continue;
            }
            let Some(frame) = stack.pop() else {
                break;
            };
            let copy = TrieNode {
                children: frame.done,
                is_end: frame.source.is_end,
                words: frame.source.words,
            };
            match (stack.last_mut(), frame.label) {
                (Some(parent), Some(label)) => {
                    parent.done.insert(label, copy);
                }
                _ => return copy,
            }
        }
        TrieNode::new()
    }
}

// Shallow: lists child labels instead of descending into them.
impl<L: Label> fmt::Debug for TrieNode<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_end", &self.is_end)
            .field("words", &self.words)
            .field("labels", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
