use crate::iter::{count_words_in, Completions};
use crate::node::TrieNode;
use crate::{Label, Trie};

/// Result of probing a key in the trie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProbeResult {
    /// Whether the key is a stored word.
    pub is_word: bool,
    /// Whether the key is a proper prefix of a stored word.
    pub has_children: bool,
}

impl<L: Label> Trie<L> {
    /// Exact match search. Returns true if `key` is a stored word.
    ///
    /// A key that only exists as a prefix of other words returns false.
    pub fn search(&self, key: &[L]) -> bool {
        self.find(key).is_some_and(|node| node.is_end)
    }

    /// Returns true if the path for `prefix` exists, whether or not it ends a
    /// word. The empty prefix always exists.
    ///
    /// Under lazy delete, paths of deleted words keep existing.
    pub fn starts_with(&self, prefix: &[L]) -> bool {
        self.find(prefix).is_some()
    }

    /// Probe a key. Returns whether the key is a word and whether longer
    /// words start with it.
    pub fn probe(&self, key: &[L]) -> ProbeResult {
        match self.find(key) {
            Some(node) => ProbeResult {
                is_word: node.is_end,
                has_children: node.words > usize::from(node.is_end),
            },
            None => ProbeResult::default(),
        }
    }

    /// Returns every stored word starting with `prefix`, in depth-first
    /// ascending label order. Empty if the prefix path does not exist.
    pub fn auto_complete(&self, prefix: &[L]) -> Vec<Vec<L>> {
        self.completions(prefix).collect()
    }

    /// Lazy form of [`auto_complete`](Self::auto_complete).
    pub fn completions<'a>(&'a self, prefix: &[L]) -> Completions<'a, L> {
        Completions::new(self.find(prefix), prefix)
    }

    /// Counts stored words by walking the whole trie.
    ///
    /// Always equals [`len`](Self::len).
    pub fn count_words(&self) -> usize {
        count_words_in(&self.root)
    }

    /// Counts stored words starting with `prefix`; 0 if the path is missing.
    pub fn count_words_with_prefix(&self, prefix: &[L]) -> usize {
        self.find(prefix).map_or(0, count_words_in)
    }

    /// Returns the longest prefix of `key` that exists as a path in the trie.
    ///
    /// The path need not end a word: with only `"cat"` stored, the longest
    /// prefix of `"camera"` is `"ca"`. See
    /// [`longest_word_prefix`](Self::longest_word_prefix) for the
    /// dictionary-word variant.
    pub fn longest_prefix<'k>(&self, key: &'k [L]) -> &'k [L] {
        let mut node = &self.root;
        let mut len = 0;
        for label in key {
            match node.children.get(label) {
                Some(child) => {
                    node = child;
                    len += 1;
                }
                None => break,
            }
        }
        &key[..len]
    }

    /// Returns the longest stored word that is a prefix of `key`.
    pub fn longest_word_prefix<'k>(&self, key: &'k [L]) -> Option<&'k [L]> {
        self.common_prefix_search(key)
            .last()
            .map(|len| &key[..len])
    }

    /// Common prefix search. Returns an iterator over the lengths of all
    /// stored words that are prefixes of `query`, shortest first.
    pub fn common_prefix_search<'a>(
        &'a self,
        query: &'a [L],
    ) -> impl Iterator<Item = usize> + 'a {
        CommonPrefixIter {
            node: Some(&self.root),
            query,
            pos: 0,
        }
    }
}

struct CommonPrefixIter<'a, L: Label> {
    node: Option<&'a TrieNode<L>>,
    query: &'a [L],
    pos: usize,
}

impl<L: Label> Iterator for CommonPrefixIter<'_, L> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(node) = self.node {
            let len = self.pos;
            self.node = self
                .query
                .get(len)
                .and_then(|label| node.children.get(label));
            self.pos += 1;
            if node.is_end {
                return Some(len);
            }
        }
        None
    }
}
