// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The persistent trie over indexed prefixes.
//!
//! States are integers with the path encoded in them, so the trie itself only
//! has to remember which states exist: one incoming edge per non-root state
//! and the child list of every state. Together these form a forest rooted at
//! [`ROOT`].
//!
//! Traversals use an explicit stack rather than recursion, so deep tries and
//! large edit budgets cannot exhaust the call stack.

mod cost_annotated;

pub use cost_annotated::CostAnnotatedStateSet;

use crate::error::{Error, Result};
use crate::types::{State, Symbol, ROOT};
use std::collections::{BTreeSet, HashMap};

/// Incoming edge of a non-root state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    parent: State,
    symbol: Symbol,
}

/// Trie structure: edges and child lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSet {
    edges: HashMap<State, Edge>,
    children: HashMap<State, BTreeSet<State>>,
}

impl StateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the edge `parent -> state` labelled `symbol`.
    ///
    /// Re-adding a state under a different parent moves it: the last write
    /// wins and the old parent forgets it.
    pub fn add(&mut self, state: State, parent: State, symbol: Symbol) {
        let edge = Edge { parent, symbol };
        if let Some(previous) = self.edges.insert(state, edge) {
            if previous.parent != parent {
                self.detach_child(previous.parent, state);
            }
        }
        self.children.entry(parent).or_default().insert(state);
    }

    /// Remove `state` together with everything below it.
    ///
    /// Returns the number of states removed. The root cannot be removed.
    pub fn remove(&mut self, state: State) -> usize {
        let Some(edge) = self.edges.get(&state).copied() else {
            return 0;
        };
        self.detach_child(edge.parent, state);

        let mut removed = 0;
        let mut stack = vec![state];
        while let Some(current) = stack.pop() {
            self.edges.remove(&current);
            if let Some(children) = self.children.remove(&current) {
                stack.extend(children);
            }
            removed += 1;
        }
        removed
    }

    /// Whether `state` is part of the trie. The root always is.
    #[inline]
    pub fn contains(&self, state: State) -> bool {
        state == ROOT || self.edges.contains_key(&state)
    }

    /// Children of `state` in ascending order (empty if none).
    pub fn children_of(&self, state: State) -> impl Iterator<Item = State> + '_ {
        self.children.get(&state).into_iter().flatten().copied()
    }

    pub fn has_children(&self, state: State) -> bool {
        self.children.get(&state).is_some_and(|children| !children.is_empty())
    }

    /// Symbol on the edge into `state`.
    ///
    /// Asking for a state that was never added is a caller bug and yields
    /// [`Error::UnknownState`].
    pub fn char_for_state(&self, state: State) -> Result<Symbol> {
        self.edges
            .get(&state)
            .map(|edge| edge.symbol)
            .ok_or(Error::UnknownState(state))
    }

    /// Parent of `state`, or `None` for the root and unknown states.
    pub fn parent_of(&self, state: State) -> Option<State> {
        self.edges.get(&state).map(|edge| edge.parent)
    }

    /// `start` at `current_distance`, plus every descendant at one extra
    /// unit of cost per edge, stopping once the cost exceeds `edit_distance`.
    ///
    /// This is the "free" descent used to model insertions during a search.
    pub fn reachable_states(
        &self,
        start: State,
        edit_distance: usize,
        current_distance: usize,
    ) -> CostAnnotatedStateSet {
        let mut reachable = CostAnnotatedStateSet::new();
        self.collect_reachable(start, edit_distance, current_distance, &mut reachable);
        reachable
    }

    /// Accumulating form of [`reachable_states`](Self::reachable_states).
    pub(crate) fn collect_reachable(
        &self,
        start: State,
        edit_distance: usize,
        current_distance: usize,
        into: &mut CostAnnotatedStateSet,
    ) {
        let mut stack = vec![(start, current_distance)];
        while let Some((state, cost)) = stack.pop() {
            if cost > edit_distance {
                continue;
            }
            into.add(state, cost);
            if cost < edit_distance {
                stack.extend(self.children_of(state).map(|child| (child, cost + 1)));
            }
        }
    }

    /// Every non-root state in ascending order.
    pub fn states(&self) -> Vec<State> {
        let states: BTreeSet<State> = self.edges.keys().copied().collect();
        states.into_iter().collect()
    }

    /// Number of non-root states.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate `(state, parent, symbol)` for every edge.
    pub(crate) fn edges(&self) -> impl Iterator<Item = (State, State, Symbol)> + '_ {
        self.edges
            .iter()
            .map(|(&state, edge)| (state, edge.parent, edge.symbol))
    }

    fn detach_child(&mut self, parent: State, child: State) {
        if let Some(children) = self.children.get_mut(&parent) {
            children.remove(&child);
            if children.is_empty() {
                self.children.remove(&parent);
            }
        }
    }
}
