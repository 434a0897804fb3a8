use tracing::trace;

use crate::node::TrieNode;
use crate::{DeleteMode, Label, Trie};

impl<L: Label> Trie<L> {
    /// Inserts `key` as a word, creating one node per missing label.
    ///
    /// The empty key marks the root. Returns `true` if the word was not
    /// already stored; inserting a stored word changes nothing.
    pub fn insert(&mut self, key: &[L]) -> bool {
        if self.search(key) {
            return false;
        }

        let mut created = 0;
        let mut node = &mut self.root;
        node.words += 1;
        for &label in key {
            node = node.children.entry(label).or_insert_with(|| {
                created += 1;
                TrieNode::new()
            });
            node.words += 1;
        }
        node.is_end = true;
        self.nodes += created;
        true
    }

    /// Deletes the word `key`.
    ///
    /// Returns `false` without touching the trie if the path is missing or
    /// does not end a word. Under [`DeleteMode::Lazy`] only the word flag is
    /// cleared; under [`DeleteMode::Prune`] the branch that led only to this
    /// word is unlinked as well.
    pub fn delete(&mut self, key: &[L]) -> bool {
        if !self.search(key) {
            return false;
        }
        match self.delete_mode {
            DeleteMode::Lazy => self.unmark(key),
            DeleteMode::Prune => self.prune(key),
        }
        true
    }

    // Callers guarantee `key` is a stored word.
    fn unmark(&mut self, key: &[L]) {
        let mut node = &mut self.root;
        node.words -= 1;
        for label in key {
            node = child_on_path(node, label);
            node.words -= 1;
        }
        node.is_end = false;
    }

    // Callers guarantee `key` is a stored word.
    fn prune(&mut self, key: &[L]) {
        let mut node = &mut self.root;
        node.words -= 1;
        for (depth, label) in key.iter().enumerate() {
            // A child counting one word holds only `key`, so its subtree is
            // the chain down to the terminal node.
            if node.children.get(label).is_some_and(|child| child.words == 1) {
                node.children.remove(label);
                let freed = key.len() - depth;
                self.nodes -= freed;
                trace!(depth, freed, label = label.code(), "pruned branch");
                return;
            }
            node = child_on_path(node, label);
            node.words -= 1;
        }
        node.is_end = false;
    }
}

/// Steps from `node` to its child under `label` on the path of a stored word.
///
/// Every label of a stored word has a node, so the lookup cannot miss.
fn child_on_path<'n, L: Label>(node: &'n mut TrieNode<L>, label: &L) -> &'n mut TrieNode<L> {
    match node.children.get_mut(label) {
        Some(child) => child,
        None => unreachable!("no node for label {label:?} on a stored word's path"),
    }
}

impl<L: Label, K: AsRef<[L]>> Extend<K> for Trie<L> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key.as_ref());
        }
    }
}

impl<L: Label, K: AsRef<[L]>> FromIterator<K> for Trie<L> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut trie = Self::new();
        trie.extend(keys);
        trie
    }
}
