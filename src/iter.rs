use std::iter::FusedIterator;

use crate::node::TrieNode;
use crate::Label;

/// Iterator over the stored words that start with a prefix.
///
/// Words are yielded depth-first with children visited in ascending label
/// order, so a word always comes before its extensions. Created by
/// [`Trie::completions`](crate::Trie::completions).
#[derive(Clone, Debug)]
pub struct Completions<'a, L: Label> {
    /// DFS stack: (node, parent_depth, label_to_append).
    /// `None` label = prefix node; key_buf already holds the prefix.
    stack: Vec<(&'a TrieNode<L>, usize, Option<L>)>,
    /// Shared key buffer. Truncated and extended as the DFS proceeds; only
    /// cloned when a word is emitted.
    key_buf: Vec<L>,
}

impl<'a, L: Label> Completions<'a, L> {
    pub(crate) fn new(start: Option<&'a TrieNode<L>>, prefix: &[L]) -> Self {
        let mut stack = Vec::new();
        if let Some(node) = start {
            stack.push((node, prefix.len(), None));
        }
        Self {
            stack,
            key_buf: prefix.to_vec(),
        }
    }
}

impl<L: Label> Iterator for Completions<'_, L> {
    type Item = Vec<L>;

    fn next(&mut self) -> Option<Vec<L>> {
        while let Some((node, parent_depth, label)) = self.stack.pop() {
            self.key_buf.truncate(parent_depth);
            if let Some(l) = label {
                self.key_buf.push(l);
            }
            let depth = self.key_buf.len();

            // Pushed in reverse so the smallest label is popped first.
            for (&l, child) in node.children.iter().rev() {
                if !child.is_dead() {
                    self.stack.push((child, depth, Some(l)));
                }
            }

            if node.is_end {
                return Some(self.key_buf.clone());
            }
        }
        None
    }
}

impl<L: Label> FusedIterator for Completions<'_, L> {}

/// Counts the word nodes in the subtree rooted at `start`.
pub(crate) fn count_words_in<L: Label>(start: &TrieNode<L>) -> usize {
    let mut count = 0;
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        if node.is_end {
            count += 1;
        }
        stack.extend(node.children.values().filter(|child| !child.is_dead()));
    }
    count
}
