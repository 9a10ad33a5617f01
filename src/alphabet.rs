// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character to symbol reduction.
//!
//! The trie branches on symbols, not characters. An alphabet folds the full
//! character range into `1..=alphabet_size`, which keeps the trie small at the
//! cost of collisions: two different characters may share a symbol. Those
//! collisions only ever add candidates, and exact verification removes them.

use crate::types::Symbol;
use std::collections::HashMap;

/// Deterministic `char -> symbol` mapping.
///
/// Implementations must be pure: the same `(character, alphabet_size)` pair
/// always yields the same symbol, and the symbol lies in `1..=alphabet_size`.
pub trait Alphabet {
    fn map(&self, character: char, alphabet_size: Symbol) -> Symbol;
}

/// Maps a character by its Unicode scalar value: `codepoint % size + 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Alphabet;

impl Alphabet for Utf8Alphabet {
    #[inline]
    fn map(&self, character: char, alphabet_size: Symbol) -> Symbol {
        u32::from(character) % alphabet_size + 1
    }
}

/// Explicit lookup table, falling back to [`Utf8Alphabet`] for characters it
/// does not list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAlphabet {
    table: HashMap<char, Symbol>,
}

impl InMemoryAlphabet {
    pub fn new(table: HashMap<char, Symbol>) -> Self {
        Self { table }
    }
}

impl FromIterator<(char, Symbol)> for InMemoryAlphabet {
    fn from_iter<I: IntoIterator<Item = (char, Symbol)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Alphabet for InMemoryAlphabet {
    fn map(&self, character: char, alphabet_size: Symbol) -> Symbol {
        match self.table.get(&character) {
            Some(&symbol) => symbol,
            None => Utf8Alphabet.map(character, alphabet_size),
        }
    }
}

impl<A: Alphabet + ?Sized> Alphabet for &A {
    fn map(&self, character: char, alphabet_size: Symbol) -> Symbol {
        (**self).map(character, alphabet_size)
    }
}
