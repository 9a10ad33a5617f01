// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Crate-wide error type.
//!
//! Most of the engine is pure computation and cannot fail. What remains is
//! configuration validation, collaborators breaking their contracts, and
//! callers asking about states that were never added.

use crate::types::{State, Symbol};
use thiserror::Error;

/// Errors produced by the index, its configuration, and the distance oracles.
#[derive(Debug, Error)]
pub enum Error {
    /// `index_length` was zero.
    #[error("index length must be greater than zero")]
    ZeroIndexLength,

    /// `alphabet_size` was zero.
    #[error("alphabet size must be greater than zero")]
    ZeroAlphabetSize,

    /// The deepest encodable state does not fit a `u64`.
    #[error(
        "alphabet size {alphabet_size} with index length {index_length} overflows the 64-bit state space"
    )]
    StateSpaceOverflow {
        index_length: usize,
        alphabet_size: Symbol,
    },

    /// A state was queried that was never added to the trie.
    #[error("state {0} has no mapped character (was it ever added?)")]
    UnknownState(State),

    /// An alphabet returned a symbol outside `1..=alphabet_size`.
    #[error("alphabet mapped {character:?} to {symbol}, outside 1..={alphabet_size}")]
    SymbolOutOfRange {
        character: char,
        symbol: Symbol,
        alphabet_size: Symbol,
    },

    /// An edit operation was given a cost of zero.
    #[error("{0} cost must be greater than zero")]
    ZeroCost(&'static str),

    /// Distance input was not well-formed UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A serialized configuration could not be parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
