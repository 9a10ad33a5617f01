// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Frontier sets: states annotated with the cheapest cost seen for them.

use crate::types::State;
use std::collections::BTreeMap;

/// Mapping `state -> minimal cost` with min-merge semantics.
///
/// Adding a state twice keeps the lower cost, so merging is commutative,
/// associative and idempotent. Iteration is in ascending state order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostAnnotatedStateSet {
    set: BTreeMap<State, usize>,
}

impl CostAnnotatedStateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `state`, or lower its cost to `cost` if that is cheaper.
    #[inline]
    pub fn add(&mut self, state: State, cost: usize) {
        self.set
            .entry(state)
            .and_modify(|existing| *existing = (*existing).min(cost))
            .or_insert(cost);
    }

    /// Pointwise-minimum union, leaving both inputs untouched.
    pub fn merge_with(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.merge_in(other);
        merged
    }

    /// In-place form of [`merge_with`](Self::merge_with).
    pub fn merge_in(&mut self, other: &Self) {
        for (&state, &cost) in &other.set {
            self.add(state, cost);
        }
    }

    /// State ids in ascending order.
    pub fn states(&self) -> Vec<State> {
        self.set.keys().copied().collect()
    }

    /// The full `state -> cost` mapping.
    pub fn all(&self) -> &BTreeMap<State, usize> {
        &self.set
    }

    pub fn cost(&self, state: State) -> Option<usize> {
        self.set.get(&state).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (State, usize)> + '_ {
        self.set.iter().map(|(&state, &cost)| (state, cost))
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl FromIterator<(State, usize)> for CostAnnotatedStateSet {
    fn from_iter<I: IntoIterator<Item = (State, usize)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (state, cost) in iter {
            set.add(state, cost);
        }
        set
    }
}
