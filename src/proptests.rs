use std::collections::BTreeSet;

use proptest::collection::vec;
use proptest::prelude::*;

use crate::{DeleteMode, Trie};

fn word() -> impl Strategy<Value = Vec<u8>> {
    vec(b'a'..=b'e', 0..6)
}

fn words() -> impl Strategy<Value = Vec<Vec<u8>>> {
    vec(word(), 0..24)
}

fn delete_mode() -> impl Strategy<Value = DeleteMode> {
    prop_oneof![Just(DeleteMode::Lazy), Just(DeleteMode::Prune)]
}

fn build(mode: DeleteMode, keys: &[Vec<u8>]) -> Trie<u8> {
    let mut trie: Trie<u8> = Trie::with_delete_mode(mode);
    trie.extend(keys);
    trie
}

proptest! {
    #[test]
    fn inserted_words_are_found(keys in words()) {
        let trie: Trie<u8> = keys.iter().collect();
        for key in &keys {
            prop_assert!(trie.search(key));
        }
    }

    #[test]
    fn insert_twice_is_idempotent(keys in words()) {
        let once: Trie<u8> = keys.iter().collect();
        let mut twice = once.clone();
        twice.extend(&keys);
        prop_assert_eq!(once.count_words(), twice.count_words());
        prop_assert_eq!(once.num_nodes(), twice.num_nodes());
        for key in &keys {
            prop_assert_eq!(once.search(key), twice.search(key));
        }
    }

    #[test]
    fn every_prefix_of_a_word_exists(keys in words()) {
        let trie: Trie<u8> = keys.iter().collect();
        for key in &keys {
            for len in 0..=key.len() {
                prop_assert!(trie.starts_with(&key[..len]));
            }
        }
    }

    #[test]
    fn delete_unmarks_word_only(keys in words(), victim in word()) {
        let mut trie: Trie<u8> = keys.iter().collect();
        let was_word = trie.search(&victim);
        let nodes = trie.num_nodes();
        prop_assert_eq!(trie.delete(&victim), was_word);
        prop_assert!(!trie.search(&victim));
        prop_assert_eq!(trie.num_nodes(), nodes);
        if was_word {
            // Lazy delete leaves the whole path in place.
            for len in 0..=victim.len() {
                prop_assert!(trie.starts_with(&victim[..len]));
            }
        }
        for key in keys.iter().filter(|k| **k != victim) {
            prop_assert!(trie.search(key));
        }
    }

    #[test]
    fn prune_keeps_only_live_paths(keys in words(), victims in words()) {
        let mut trie = build(DeleteMode::Prune, &keys);
        for victim in &victims {
            trie.delete(victim);
        }
        let live: BTreeSet<&Vec<u8>> = keys.iter().filter(|k| !victims.contains(k)).collect();
        let mut paths = BTreeSet::new();
        for key in &live {
            for len in 0..=key.len() {
                paths.insert(&key[..len]);
            }
        }
        prop_assert_eq!(trie.num_nodes(), paths.len().max(1));
        for victim in &victims {
            let prefix_of_live = live.iter().any(|k| k.starts_with(victim));
            prop_assert_eq!(trie.starts_with(victim), prefix_of_live || victim.is_empty());
        }
    }

    #[test]
    fn counts_match_enumeration(mode in delete_mode(), keys in words(), victims in words(), prefix in word()) {
        let mut trie = build(mode, &keys);
        for victim in &victims {
            trie.delete(victim);
        }
        prop_assert_eq!(trie.count_words(), trie.auto_complete(&[]).len());
        prop_assert_eq!(trie.count_words(), trie.len());
        prop_assert_eq!(
            trie.count_words_with_prefix(&prefix),
            trie.auto_complete(&prefix).len()
        );
    }

    #[test]
    fn autocomplete_is_sorted_set(mode in delete_mode(), keys in words(), victims in words(), prefix in word()) {
        let mut trie = build(mode, &keys);
        for victim in &victims {
            trie.delete(victim);
        }
        let expected: Vec<Vec<u8>> = keys
            .iter()
            .filter(|k| !victims.contains(k) && k.starts_with(&prefix))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        prop_assert_eq!(trie.auto_complete(&prefix), expected);
    }

    #[test]
    fn absent_keys_are_not_found(keys in vec(vec(b'a'..=b'c', 0..6), 0..16), absent in vec(b'x'..=b'z', 1..6)) {
        let trie: Trie<u8> = keys.iter().collect();
        prop_assert!(!trie.search(&absent));
        prop_assert!(!trie.starts_with(&absent));
        prop_assert!(trie.longest_prefix(&absent).is_empty());
    }

    #[test]
    fn longest_prefix_is_a_path(keys in words(), query in word()) {
        let trie: Trie<u8> = keys.iter().collect();
        let matched = trie.longest_prefix(&query);
        prop_assert!(query.starts_with(matched));
        prop_assert!(trie.starts_with(matched));
        if matched.len() < query.len() {
            prop_assert!(!trie.starts_with(&query[..=matched.len()]));
        }
        if let Some(word) = trie.longest_word_prefix(&query) {
            prop_assert!(trie.search(word));
            prop_assert!(word.len() <= matched.len());
        }
    }
}
