// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Storage of "state -> accepted strings" associations.
//!
//! The trie only knows structure. Which original strings end at a state is
//! kept here, behind a trait so callers can back it with whatever storage
//! they already have.

use crate::types::State;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Associates trie states with the strings that terminate at them.
///
/// Strings within one state keep their insertion order.
pub trait DataStore {
    /// Record `string` as accepted by `state`. Adding an existing pair is a
    /// no-op; returns whether anything was inserted.
    fn add(&mut self, state: State, string: &str) -> bool;

    /// Forget `string` at `state`; returns whether it was present.
    fn remove(&mut self, state: State, string: &str) -> bool;

    /// Associations for the given states, keyed in ascending state order.
    /// States without strings are omitted.
    fn get_for_states(&self, states: &[State]) -> BTreeMap<State, Vec<String>>;

    /// Every association.
    fn all(&self) -> BTreeMap<State, Vec<String>>;

    /// Whether any string terminates at `state`.
    fn accepts(&self, state: State) -> bool {
        !self.get_for_states(&[state]).is_empty()
    }
}

/// Ordered in-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryDataStore {
    data: BTreeMap<State, Vec<String>>,
}

impl InMemoryDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored `(state, string)` pairs.
    pub fn len(&self) -> usize {
        self.data.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl DataStore for InMemoryDataStore {
    fn add(&mut self, state: State, string: &str) -> bool {
        let strings = self.data.entry(state).or_default();
        if strings.iter().any(|s| s == string) {
            return false;
        }
        strings.push(string.to_string());
        true
    }

    fn remove(&mut self, state: State, string: &str) -> bool {
        let Some(strings) = self.data.get_mut(&state) else {
            return false;
        };
        let Some(position) = strings.iter().position(|s| s == string) else {
            return false;
        };
        strings.remove(position);
        if strings.is_empty() {
            self.data.remove(&state);
        }
        true
    }

    fn get_for_states(&self, states: &[State]) -> BTreeMap<State, Vec<String>> {
        states
            .iter()
            .filter_map(|state| Some((*state, self.data.get(state)?.clone())))
            .collect()
    }

    fn all(&self) -> BTreeMap<State, Vec<String>> {
        self.data.clone()
    }

    fn accepts(&self, state: State) -> bool {
        self.data.contains_key(&state)
    }
}
