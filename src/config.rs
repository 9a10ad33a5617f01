// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index configuration.
//!
//! Two numbers shape the whole trie: how many leading characters of each
//! string are indexed, and how many symbols the alphabet reduces characters
//! to. Together they bound the state space at roughly
//! `alphabet_size^index_length`, which has to fit a `u64`. A `Config` can only
//! be obtained through validation, so the index never has to re-check it.

use crate::error::{Error, Result};
use crate::types::{State, Symbol};
use serde::{Deserialize, Serialize};

/// Validated index parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    index_length: usize,
    alphabet_size: Symbol,
}

/// Unvalidated shape used for deserialization.
#[derive(Deserialize)]
struct RawConfig {
    index_length: usize,
    alphabet_size: Symbol,
}

impl TryFrom<RawConfig> for Config {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        Config::new(raw.index_length, raw.alphabet_size)
    }
}

impl Config {
    /// Validate and build a configuration.
    ///
    /// Fails on a zero `index_length` or `alphabet_size`, and when the deepest
    /// encodable state would overflow [`State`].
    pub fn new(index_length: usize, alphabet_size: Symbol) -> Result<Self> {
        if index_length == 0 {
            return Err(Error::ZeroIndexLength);
        }
        if alphabet_size == 0 {
            return Err(Error::ZeroAlphabetSize);
        }
        max_state(index_length, alphabet_size).ok_or(Error::StateSpaceOverflow {
            index_length,
            alphabet_size,
        })?;

        Ok(Self {
            index_length,
            alphabet_size,
        })
    }

    /// Parse a configuration from JSON, e.g. `{"index_length": 6, "alphabet_size": 4}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of leading characters of each string that enter the trie.
    pub fn index_length(&self) -> usize {
        self.index_length
    }

    /// Number of distinct symbols the alphabet may produce.
    pub fn alphabet_size(&self) -> Symbol {
        self.alphabet_size
    }

    /// Largest state id this configuration can produce.
    pub fn max_state(&self) -> State {
        // Validated at construction.
        max_state(self.index_length, self.alphabet_size).unwrap_or(State::MAX)
    }
}

/// The state reached by following the highest symbol `index_length` times,
/// or `None` if that overflows.
fn max_state(index_length: usize, alphabet_size: Symbol) -> Option<State> {
    let size = State::from(alphabet_size);
    (0..index_length).try_fold(0, |state: State, _| state.checked_mul(size)?.checked_add(size))
}
