use std::io::BufRead;

use tracing::debug;

use crate::{DeleteMode, Trie, TrieError};

/// Options for [`load_words_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordListOptions {
    /// Skip lines starting with `#`.
    pub skip_comments: bool,
    /// Insert blank lines as the empty word instead of skipping them.
    pub keep_empty: bool,
    /// Delete mode of the resulting trie.
    pub delete_mode: DeleteMode,
}

impl Default for WordListOptions {
    fn default() -> Self {
        Self {
            skip_comments: true,
            keep_empty: false,
            delete_mode: DeleteMode::Lazy,
        }
    }
}

/// Loads a word list, one word per line, with default options.
pub fn load_words<R: BufRead>(reader: R) -> Result<Trie, TrieError> {
    load_words_with(reader, &WordListOptions::default())
}

/// Loads a word list, one word per line.
///
/// Line endings (`\n` or `\r\n`) are stripped; every other character is kept,
/// so words are matched exactly as written.
///
/// # Errors
///
/// Returns [`TrieError::Io`] with the 1-based line number if reading fails,
/// including when a line is not valid UTF-8.
pub fn load_words_with<R: BufRead>(
    reader: R,
    options: &WordListOptions,
) -> Result<Trie, TrieError> {
    let mut trie = Trie::with_delete_mode(options.delete_mode);
    let mut lines = 0usize;
    let mut duplicates = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| TrieError::Io {
            line: idx + 1,
            source,
        })?;
        lines += 1;

        if line.is_empty() && !options.keep_empty {
            continue;
        }
        if options.skip_comments && line.starts_with('#') {
            continue;
        }
        if !trie.insert_str(&line) {
            duplicates += 1;
        }
    }

    debug!(
        lines,
        words = trie.len(),
        nodes = trie.num_nodes(),
        duplicates,
        "loaded word list"
    );
    Ok(trie)
}
