//! `&str` forms of the trie operations for `Trie<char>`.

use crate::Trie;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

impl Trie<char> {
    /// Builds a trie holding every word of `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert_str(word.as_ref());
        }
        trie
    }

    /// See [`insert`](Self::insert).
    pub fn insert_str(&mut self, word: &str) -> bool {
        self.insert(&chars(word))
    }

    /// See [`search`](Self::search).
    pub fn search_str(&self, word: &str) -> bool {
        self.search(&chars(word))
    }

    /// See [`starts_with`](Self::starts_with).
    pub fn starts_with_str(&self, prefix: &str) -> bool {
        self.starts_with(&chars(prefix))
    }

    /// See [`auto_complete`](Self::auto_complete).
    pub fn auto_complete_str(&self, prefix: &str) -> Vec<String> {
        self.completions(&chars(prefix))
            .map(|word| word.into_iter().collect())
            .collect()
    }

    /// See [`count_words_with_prefix`](Self::count_words_with_prefix).
    pub fn count_words_with_prefix_str(&self, prefix: &str) -> usize {
        self.count_words_with_prefix(&chars(prefix))
    }

    /// See [`longest_prefix`](Self::longest_prefix).
    pub fn longest_prefix_str(&self, word: &str) -> String {
        self.longest_prefix(&chars(word)).iter().collect()
    }

    /// See [`longest_word_prefix`](Self::longest_word_prefix).
    pub fn longest_word_prefix_str(&self, word: &str) -> Option<String> {
        self.longest_word_prefix(&chars(word))
            .map(|prefix| prefix.iter().collect())
    }

    /// See [`delete`](Self::delete).
    pub fn delete_str(&mut self, word: &str) -> bool {
        self.delete(&chars(word))
    }
}
