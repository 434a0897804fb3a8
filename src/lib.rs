//! A char-wise prefix tree with autocomplete, prefix counting and lazy delete.
//!
//! This crate provides [`Trie`], a pointer trie whose nodes own their children
//! in an ordered map. It supports insertion, exact match, prefix checks,
//! autocomplete, word counting, longest-prefix match and delete over sequences
//! of [`Label`] elements (`u8` or `char`).
//!
//! Delete is lazy by default: the word is unmarked but its nodes stay
//! allocated. [`DeleteMode::Prune`] unlinks branches that no longer lead to
//! any word instead.
//!
//! # Quick start
//!
//! ```
//! use lazy_trie::Trie;
//!
//! let mut trie: Trie = Trie::from_words(["cat", "cap", "can", "bat"]);
//! assert!(trie.search_str("cap"));
//! assert_eq!(trie.auto_complete_str("ca"), vec!["can", "cap", "cat"]);
//! assert_eq!(trie.longest_prefix_str("camera"), "ca");
//!
//! assert!(trie.delete_str("cap"));
//! assert_eq!(trie.count_words(), 3);
//! assert!(trie.starts_with_str("cap"));
//! ```

#![warn(missing_docs)]

mod edit;
mod iter;
mod label;
mod node;
mod search;
mod text;
mod wordlist;

#[cfg(test)]
mod proptests;

use std::fmt;
use std::io;

pub use iter::Completions;
pub use label::Label;
pub use search::ProbeResult;
pub use wordlist::{load_words, load_words_with, WordListOptions};

use node::TrieNode;

/// Errors that can occur while loading a trie.
///
/// Trie operations themselves never fail; absence is reported through
/// `false`, `0` or empty results.
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    /// Reading the word list failed.
    #[error("failed to read word list at line {line}")]
    Io {
        /// 1-based line number of the failed read.
        line: usize,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// How [`Trie::delete`] treats nodes that no longer lead to any word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteMode {
    /// Unmark the word only; every node stays allocated until the trie is dropped.
    #[default]
    Lazy,
    /// Also unlink the branch that led only to the deleted word.
    Prune,
}

/// A prefix tree over sequences of labels.
#[derive(Clone)]
pub struct Trie<L: Label = char> {
    pub(crate) root: TrieNode<L>,
    pub(crate) nodes: usize,
    pub(crate) delete_mode: DeleteMode,
}

// Summary only; the node tree can be arbitrarily deep.
impl<L: Label> fmt::Debug for Trie<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("len", &self.len())
            .field("num_nodes", &self.nodes)
            .field("delete_mode", &self.delete_mode)
            .finish()
    }
}

impl<L: Label> Default for Trie<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> Trie<L> {
    /// Creates an empty trie with lazy delete.
    pub fn new() -> Self {
        Self::with_delete_mode(DeleteMode::Lazy)
    }

    /// Creates an empty trie with the given delete mode.
    pub fn with_delete_mode(delete_mode: DeleteMode) -> Self {
        Self {
            root: TrieNode::new(),
            nodes: 1,
            delete_mode,
        }
    }

    /// Returns the delete mode chosen at construction.
    pub fn delete_mode(&self) -> DeleteMode {
        self.delete_mode
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.root.words
    }

    /// Returns true if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.root.words == 0
    }

    /// Returns the number of allocated nodes, root included.
    pub fn num_nodes(&self) -> usize {
        self.nodes
    }

    /// Removes every word and node, keeping the delete mode.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.nodes = 1;
    }

    /// Follows `key` from the root. Returns the node after consuming all
    /// labels, or None if the path does not exist.
    #[inline]
    pub(crate) fn find(&self, key: &[L]) -> Option<&TrieNode<L>> {
        key.iter()
            .try_fold(&self.root, |node, label| node.children.get(label))
    }
}
