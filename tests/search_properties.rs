//! Property-based tests for SearchIndex.
//!
//! Covers the prefix floor, normalization, invalidation and ranking
//! guarantees using proptest.

use proptest::prelude::*;
use trieward::{IndexEntry, SearchIndex};

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_word() -> impl Strategy<Value = String> {
    "[a-z0-9]{3,10}"
}

fn arbitrary_name() -> impl Strategy<Value = String> {
    prop::collection::vec(arbitrary_word(), 1..4).prop_map(|words| words.join(" "))
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<IndexEntry<u32>>> {
    prop::collection::vec(arbitrary_name(), 1..20).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(id, name)| IndexEntry::new(name, id as u32))
            .collect()
    })
}

fn arbitrary_raw_query() -> impl Strategy<Value = String> {
    "[ a-zA-Z0-9'&!.\\-\u{e9}\t]{0,24}"
}

fn build(entries: &[IndexEntry<u32>]) -> SearchIndex<u32> {
    let mut index = SearchIndex::new();
    for entry in entries {
        index.insert(&entry.text, entry.value);
    }
    index
}

// =============================================================================
// Prefix floor: every prefix of length >= 3 finds the token's value
// =============================================================================

proptest! {
    #[test]
    fn prop_prefix_of_three_or_more_matches(
        word in "[a-z]{3,12}",
        cut in 3usize..12,
    ) {
        let mut index = SearchIndex::new();
        index.insert(&word, 1u32);

        let prefix = &word[..cut.min(word.len())];
        prop_assert!(index.search(prefix).contains(&1));
    }
}

proptest! {
    #[test]
    fn prop_short_prefix_never_matches_alone(
        word in "[a-z]{3,12}",
        cut in 0usize..3,
    ) {
        let mut index = SearchIndex::new();
        index.insert(&word, 1u32);

        prop_assert!(index.search(&word[..cut]).is_empty());
    }
}

// =============================================================================
// Normalization idempotence: search(s) == search(normalize(s))
// =============================================================================

proptest! {
    #[test]
    fn prop_search_ignores_normalization(
        entries in arbitrary_entries(),
        query in arbitrary_raw_query(),
    ) {
        let index = build(&entries);
        let normalized = index.normalize(&query);

        prop_assert_eq!(index.search(&query), index.search(&normalized));
        prop_assert_eq!(index.normalize(&normalized), normalized);
    }
}

proptest! {
    #[test]
    fn prop_search_ignores_case(
        entries in arbitrary_entries(),
        pick in any::<prop::sample::Index>(),
    ) {
        let index = build(&entries);
        let query = &entries[pick.index(entries.len())].text;

        prop_assert_eq!(index.search(query), index.search(&query.to_uppercase()));
    }
}

// =============================================================================
// Invalidation: old tokens stop matching, the trie does not shrink
// =============================================================================

proptest! {
    #[test]
    fn prop_invalidate_hides_every_token(
        entries in arbitrary_entries(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut index = build(&entries);
        let target = &entries[pick.index(entries.len())];
        let before = index.stats();

        index.invalidate(&target.value);

        let after = index.stats();
        prop_assert_eq!(after.node_count, before.node_count);
        prop_assert_eq!(after.match_count, before.match_count);
        for token in target.text.split_whitespace() {
            prop_assert!(!index.search(token).contains(&target.value));
        }
    }
}

proptest! {
    #[test]
    fn prop_reinsert_after_invalidate(
        old_name in arbitrary_name(),
        new_name in arbitrary_name(),
    ) {
        let mut index = SearchIndex::new();
        index.insert(&old_name, 9u32);
        index.invalidate(&9);
        index.insert(&new_name, 9);

        for token in new_name.split_whitespace() {
            prop_assert_eq!(index.search(token), vec![9]);
        }
        for token in old_name.split_whitespace() {
            // a new token starting with the old one still matches by prefix
            let shadowed = new_name.split_whitespace().any(|new| new.starts_with(token));
            if !shadowed {
                prop_assert!(index.search(token).is_empty());
            }
        }
    }
}

// =============================================================================
// Ranking: matching every term beats matching a strict subset
// =============================================================================

proptest! {
    #[test]
    fn prop_full_match_ranks_first(
        first in arbitrary_word(),
        second in arbitrary_word(),
    ) {
        prop_assume!(!first.starts_with(&second) && !second.starts_with(&first));

        let mut index = SearchIndex::new();
        index.insert(&first, "subset");
        index.insert(&format!("{} {}", first, second), "all");

        let results = index.search(&format!("{} {}", first, second));
        prop_assert_eq!(results, vec!["all", "subset"]);
    }
}

proptest! {
    #[test]
    fn prop_ties_follow_insertion_order(
        name in arbitrary_name(),
        count in 2u32..10,
    ) {
        let mut index = SearchIndex::new();
        for id in 0..count {
            index.insert(&name, id);
        }

        let expected: Vec<u32> = (0..count).collect();
        prop_assert_eq!(index.search(&name), expected);
    }
}
