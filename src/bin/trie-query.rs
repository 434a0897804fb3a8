use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use lazy_trie::{load_words_with, DeleteMode, Trie, WordListOptions};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Query a word list through a prefix tree.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Word list, one word per line. Read from stdin when omitted.
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Unlink branches of deleted words instead of only unmarking them.
    #[arg(long)]
    prune: bool,

    /// Keep blank lines as the empty word.
    #[arg(long)]
    keep_empty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print whether WORD is stored.
    Search { word: String },
    /// Print whether any stored word starts with PREFIX.
    StartsWith { prefix: String },
    /// Print every stored word starting with PREFIX.
    Complete {
        #[arg(default_value = "")]
        prefix: String,
    },
    /// Print the number of stored words starting with PREFIX.
    Count {
        #[arg(default_value = "")]
        prefix: String,
    },
    /// Print the longest prefix of WORD present in the trie.
    LongestPrefix {
        word: String,
        /// Only consider prefixes that are stored words.
        #[arg(long)]
        word_only: bool,
    },
    /// Delete each WORD, then print the remaining words.
    Delete {
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn open_words(path: Option<&Path>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open word list {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn load(cli: &Cli, words: impl BufRead) -> anyhow::Result<Trie> {
    let options = WordListOptions {
        keep_empty: cli.keep_empty,
        delete_mode: if cli.prune {
            DeleteMode::Prune
        } else {
            DeleteMode::Lazy
        },
        ..Default::default()
    };
    let trie = load_words_with(words, &options).context("failed to load word list")?;
    info!(words = trie.len(), nodes = trie.num_nodes(), "word list loaded");
    Ok(trie)
}

fn run(cli: Cli, words: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
    let mut trie = load(&cli, words)?;

    match cli.command {
        Command::Search { word } => writeln!(out, "{}", trie.search_str(&word))?,
        Command::StartsWith { prefix } => writeln!(out, "{}", trie.starts_with_str(&prefix))?,
        Command::Complete { prefix } => {
            for word in trie.auto_complete_str(&prefix) {
                writeln!(out, "{word}")?;
            }
        }
        Command::Count { prefix } => {
            writeln!(out, "{}", trie.count_words_with_prefix_str(&prefix))?
        }
        Command::LongestPrefix { word, word_only } => {
            let prefix = if word_only {
                trie.longest_word_prefix_str(&word).unwrap_or_default()
            } else {
                trie.longest_prefix_str(&word)
            };
            writeln!(out, "{prefix}")?;
        }
        Command::Delete { words } => {
            for word in &words {
                let deleted = trie.delete_str(word);
                debug!(word = %word, deleted, "delete");
            }
            info!(
                words = trie.len(),
                nodes = trie.num_nodes(),
                "after delete"
            );
            for word in trie.auto_complete_str("") {
                writeln!(out, "{word}")?;
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let words = open_words(cli.words.as_deref())?;
    let stdout = io::stdout();
    run(cli, words, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const WORDS: &str = "cat\ncap\ncan\nbat\n";

    fn run_with(args: &[&str]) -> String {
        let mut argv = vec!["trie-query"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        run(cli, Cursor::new(WORDS), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn complete_lists_words() {
        assert_eq!(run_with(&["complete", "ca"]), "can\ncap\ncat\n");
    }

    #[test]
    fn count_and_search() {
        assert_eq!(run_with(&["count"]), "4\n");
        assert_eq!(run_with(&["search", "ca"]), "false\n");
        assert_eq!(run_with(&["starts-with", "ca"]), "true\n");
    }

    #[test]
    fn longest_prefix_modes() {
        assert_eq!(run_with(&["longest-prefix", "camera"]), "ca\n");
        assert_eq!(run_with(&["longest-prefix", "camera", "--word-only"]), "\n");
    }

    #[test]
    fn delete_then_list() {
        let out = run_with(&["--prune", "delete", "cap", "dog"]);
        assert_eq!(out, "bat\ncan\ncat\n");
    }

    #[test]
    fn keep_empty_counts_blank_line() {
        let cli = Cli::try_parse_from(["trie-query", "--keep-empty", "count"]).unwrap();
        let mut out = Vec::new();
        run(cli, Cursor::new("cat\n\n"), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = open_words(Some(Path::new("/nonexistent/words.txt")))
            .err()
            .unwrap();
        assert!(err.to_string().contains("failed to open word list"));
    }
}
