// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core type definitions shared by the trie, the index, and the oracles.

use crate::fuzzy::EditCosts;
use serde::{Deserialize, Serialize};

/// A trie node identifier.
///
/// The path from the root is embedded in the integer: a child of `parent`
/// reached through `symbol` is `parent * alphabet_size + symbol`. The root
/// (empty prefix) is [`ROOT`].
pub type State = u64;

/// An alphabet-reduced character, always in `1..=alphabet_size`.
pub type Symbol = u32;

/// The root state (empty prefix).
pub const ROOT: State = 0;

/// Which edit operations a query tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QueryMode {
    /// Insertions, deletions and substitutions.
    #[default]
    Levenshtein,
    /// Levenshtein plus adjacent transpositions at unit cost.
    Damerau,
}

impl QueryMode {
    /// Whether adjacent transpositions count as a single edit.
    pub fn transpositions(self) -> bool {
        matches!(self, QueryMode::Damerau)
    }

    /// Unit costs for this mode.
    pub fn costs(self) -> EditCosts {
        match self {
            QueryMode::Levenshtein => EditCosts::LEVENSHTEIN,
            QueryMode::Damerau => EditCosts::DAMERAU,
        }
    }
}

/// Cache key for per-query memo tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct QueryKey {
    pub query: String,
    pub edit_distance: usize,
    pub mode: QueryMode,
}

impl QueryKey {
    pub fn new(query: &str, edit_distance: usize, mode: QueryMode) -> Self {
        Self {
            query: query.to_string(),
            edit_distance,
            mode,
        }
    }
}
