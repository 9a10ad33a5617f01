// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: edit distance in its three forms.
//!
//! A bounded corridor distance for one-off comparisons, an incremental
//! automaton that can be fed a candidate one character at a time, and a
//! prefix-sharing filter on top of the automaton for checking many
//! candidates against the same query.

mod automaton;
mod costs;
mod levenshtein;
mod trie_filter;

pub use automaton::{Automaton, AutomatonState};
pub use costs::EditCosts;
pub use levenshtein::{
    bounded_distance, bounded_distance_utf8, damerau_levenshtein, levenshtein, levenshtein_within,
};
pub use trie_filter::TrieFilter;
