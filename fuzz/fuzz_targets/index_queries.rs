// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index queries.
//!
//! Builds a small index from arbitrary words and checks `find` against a
//! linear scan. Short index lengths and tiny alphabets force truncation and
//! symbol collisions, which is where the trie phase could drop a match.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use state_set_index::{bounded_distance, Config, QueryMode, StateSetIndex, Utf8Alphabet};

/// Fuzz input for index queries
#[derive(Debug, Arbitrary)]
struct QueryInput {
    words: Vec<String>,
    removed: Vec<u8>,
    query: String,
    budget: u8,
    index_length: u8,
    alphabet_size: u8,
    damerau: bool,
}

fuzz_target!(|input: QueryInput| {
    let words: Vec<String> = input
        .words
        .iter()
        .take(32)
        .map(|w| w.chars().take(12).collect())
        .collect();
    let query: String = input.query.chars().take(12).collect();
    let budget = usize::from(input.budget % 4);
    let mode = if input.damerau { QueryMode::Damerau } else { QueryMode::Levenshtein };

    let Ok(config) = Config::new(usize::from(input.index_length % 8) + 1, u32::from(input.alphabet_size % 8) + 1)
    else {
        return;
    };
    let mut index = StateSetIndex::in_memory(config, Utf8Alphabet);
    if index.index(&words).is_err() {
        return;
    }

    let removed: Vec<&String> = input
        .removed
        .iter()
        .filter_map(|&i| words.get(usize::from(i)))
        .collect();
    if index.remove_from_index(&removed).is_err() {
        return;
    }
    let remaining: Vec<&String> = words.iter().filter(|w| !removed.contains(w)).collect();

    let Ok(mut found) = index.find(&query, budget, mode) else {
        return;
    };
    found.sort();

    let mut expected: Vec<String> = remaining
        .into_iter()
        .filter(|w| bounded_distance(&query, w, budget + 1, mode.costs()) <= budget)
        .cloned()
        .collect();
    expected.sort();
    expected.dedup();

    // INVARIANT: find is exact after any sequence of index/remove
    assert_eq!(found, expected, "query={:?}, budget={}, mode={:?}", query, budget, mode);
});
