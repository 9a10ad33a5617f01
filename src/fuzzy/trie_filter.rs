// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix-sharing candidate filter.
//!
//! Candidates returned for one query tend to share long prefixes (they come
//! out of the same trie states). The filter memoizes the automaton state
//! reached after every prefix it has seen, so a prefix shared by a thousand
//! candidates is stepped through once. Nodes live in a flat arena and refer
//! to each other by index.

use super::automaton::{Automaton, AutomatonState};
use std::collections::HashMap;

const ROOT_NODE: usize = 0;

#[derive(Debug, Clone)]
struct FilterNode {
    children: HashMap<char, usize>,
    state: AutomatonState,
}

impl FilterNode {
    fn new(state: AutomatonState) -> Self {
        Self {
            children: HashMap::new(),
            state,
        }
    }
}

/// Decides whether candidates are within the automaton's budget of its query.
#[derive(Debug, Clone)]
pub struct TrieFilter {
    automaton: Automaton,
    nodes: Vec<FilterNode>,
}

impl TrieFilter {
    pub fn new(automaton: Automaton) -> Self {
        let root = FilterNode::new(automaton.start());
        Self {
            automaton,
            nodes: vec![root],
        }
    }

    /// Whether `candidate` is within budget of the query.
    pub fn matches(&mut self, candidate: &str) -> bool {
        self.distance(candidate).is_some()
    }

    /// Distance between the query and `candidate`, if within budget.
    pub fn distance(&mut self, candidate: &str) -> Option<usize> {
        let mut node = ROOT_NODE;
        for c in candidate.chars() {
            // Dead prefix: no extension can come back within budget
            if !self.automaton.can_match(&self.nodes[node].state) {
                return None;
            }
            node = self.child(node, c);
        }
        self.automaton.distance(&self.nodes[node].state)
    }

    /// Keep the matching candidates, in input order.
    pub fn filter<'a, I>(&mut self, candidates: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.matches(candidate))
            .collect()
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Number of memoized prefixes, the empty prefix included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn child(&mut self, node: usize, c: char) -> usize {
        if let Some(&child) = self.nodes[node].children.get(&c) {
            return child;
        }
        let state = self.automaton.step(&self.nodes[node].state, c);
        let child = self.nodes.len();
        self.nodes.push(FilterNode::new(state));
        self.nodes[node].children.insert(c, child);
        child
    }
}
