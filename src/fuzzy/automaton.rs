// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental edit-distance automaton.
//!
//! Built once per query, then fed candidate characters one at a time. A state
//! is the sparse frontier of one DP row: the positions of the query reachable
//! so far and the cheapest cost of reaching each, keeping only positions
//! whose cost is still within budget. When the frontier empties no extension
//! of the candidate can match, which is what lets [`TrieFilter`] prune.
//!
//! [`TrieFilter`]: super::TrieFilter

use super::costs::EditCosts;
use std::collections::BTreeMap;

/// A DP row frontier: `(query position, cost)` pairs in ascending position.
///
/// With transpositions enabled the state also remembers the row before it
/// and the last input character, which is all a transposition needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomatonState {
    entries: Vec<(usize, usize)>,
    prior: Vec<(usize, usize)>,
    last: Option<char>,
}

impl AutomatonState {
    /// `(position, cost)` pairs within budget, ascending by position.
    pub fn entries(&self) -> &[(usize, usize)] {
        &self.entries
    }
}

/// Levenshtein (or Damerau-Levenshtein) automaton for one query.
#[derive(Debug, Clone)]
pub struct Automaton {
    query: Vec<char>,
    max_distance: usize,
    costs: EditCosts,
}

impl Automaton {
    pub fn new(query: &str, max_distance: usize, costs: EditCosts) -> Self {
        Self {
            query: query.chars().collect(),
            max_distance,
            costs,
        }
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    pub fn costs(&self) -> EditCosts {
        self.costs
    }

    pub fn query(&self) -> String {
        self.query.iter().collect()
    }

    /// Nothing consumed yet: position 0 at cost 0, plus whatever query
    /// characters can be deleted within budget.
    pub fn start(&self) -> AutomatonState {
        AutomatonState {
            entries: self.close(BTreeMap::from([(0, 0)])),
            prior: Vec::new(),
            last: None,
        }
    }

    /// Consume one candidate character.
    pub fn step(&self, state: &AutomatonState, input: char) -> AutomatonState {
        let mut next: BTreeMap<usize, usize> = BTreeMap::new();
        let mut relax = |position: usize, cost: usize| {
            next.entry(position)
                .and_modify(|existing| *existing = (*existing).min(cost))
                .or_insert(cost);
        };

        for &(position, cost) in &state.entries {
            // Insertion: the candidate has a character the query lacks
            relax(position, cost.saturating_add(self.costs.insertion()));

            if let Some(&expected) = self.query.get(position) {
                let replacement = if expected == input { 0 } else { self.costs.replacement() };
                relax(position + 1, cost.saturating_add(replacement));
            }
        }

        if let (Some(transposition), Some(last)) = (self.costs.transposition(), state.last) {
            for &(position, cost) in &state.prior {
                if self.query.get(position) == Some(&input) && self.query.get(position + 1) == Some(&last) {
                    relax(position + 2, cost.saturating_add(transposition));
                }
            }
        }

        let entries = self.close(next);
        if self.costs.transposition().is_some() {
            AutomatonState {
                entries,
                prior: state.entries.clone(),
                last: Some(input),
            }
        } else {
            AutomatonState {
                entries,
                prior: Vec::new(),
                last: None,
            }
        }
    }

    /// Whether some extension of the consumed input can still match.
    pub fn can_match(&self, state: &AutomatonState) -> bool {
        if !state.entries.is_empty() {
            return true;
        }
        // An emptied row can still be rescued by a transposition from the
        // row before it when transpositions are cheaper than replacements.
        match self.costs.transposition() {
            Some(transposition) => state
                .prior
                .iter()
                .any(|&(_, cost)| cost.saturating_add(transposition) <= self.max_distance),
            None => false,
        }
    }

    /// Whether the consumed input is within budget of the whole query.
    pub fn is_match(&self, state: &AutomatonState) -> bool {
        self.distance(state).is_some()
    }

    /// Distance between the query and the consumed input, if within budget.
    pub fn distance(&self, state: &AutomatonState) -> Option<usize> {
        match state.entries.last() {
            Some(&(position, cost)) if position == self.query.len() => Some(cost),
            _ => None,
        }
    }

    /// Deletion closure: skipping a query character costs `deletion` and
    /// consumes no input. Positions over budget are dropped.
    fn close(&self, row: BTreeMap<usize, usize>) -> Vec<(usize, usize)> {
        let mut closed = Vec::with_capacity(row.len());
        let mut pending = row.into_iter().peekable();
        let mut carry: Option<(usize, usize)> = None;

        loop {
            let position = match (pending.peek(), carry) {
                (Some(&(next, _)), Some((carried, _))) => next.min(carried),
                (Some(&(next, _)), None) => next,
                (None, Some((carried, _))) => carried,
                (None, None) => break,
            };

            let mut cost = usize::MAX;
            if let Some(&(next, next_cost)) = pending.peek() {
                if next == position {
                    cost = next_cost;
                    pending.next();
                }
            }
            if let Some((carried, carried_cost)) = carry.take() {
                if carried == position {
                    cost = cost.min(carried_cost);
                }
            }

            if cost <= self.max_distance {
                closed.push((position, cost));
                if position < self.query.len() {
                    carry = Some((position + 1, cost.saturating_add(self.costs.deletion())));
                }
            }
        }

        closed
    }
}
