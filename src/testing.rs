//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the canonical fixtures so tests, benches and fuzz targets
//! agree on them.

#![doc(hidden)]

use crate::alphabet::{InMemoryAlphabet, Utf8Alphabet};
use crate::config::Config;
use crate::data_store::InMemoryDataStore;
use crate::error::Result;
use crate::index::StateSetIndex;

/// The five surnames of the worked example in the state-set index paper.
pub const PAPER_WORDS: [&str; 5] = ["Mueller", "Müller", "Muentner", "Muster", "Mustermann"];

/// The paper's four-symbol alphabet.
pub fn paper_alphabet() -> InMemoryAlphabet {
    [
        ('M', 1),
        ('u', 2),
        ('e', 3),
        ('l', 4),
        ('r', 1),
        ('ü', 2),
        ('n', 3),
        ('t', 4),
        ('s', 1),
        ('m', 2),
        ('a', 3),
    ]
    .into_iter()
    .collect()
}

/// Index length 6, alphabet size 4.
pub fn paper_config() -> Result<Config> {
    Config::new(6, 4)
}

/// An index holding [`PAPER_WORDS`] under the paper's alphabet.
pub fn paper_index() -> Result<StateSetIndex<InMemoryAlphabet, InMemoryDataStore>> {
    let mut index = StateSetIndex::in_memory(paper_config()?, paper_alphabet());
    index.index(PAPER_WORDS)?;
    Ok(index)
}

/// The same words under [`Utf8Alphabet`].
pub fn utf8_index(config: Config) -> Result<StateSetIndex<Utf8Alphabet, InMemoryDataStore>> {
    let mut index = StateSetIndex::in_memory(config, Utf8Alphabet);
    index.index(PAPER_WORDS)?;
    Ok(index)
}
