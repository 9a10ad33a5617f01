// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The state-set index: registration, removal and fuzzy lookup.
//!
//! # Two phases
//!
//! A query runs in two phases:
//!
//! 1. **Trie phase** (`find_matching_states`): walk the trie with a frontier
//!    of `(state, cost)` pairs, one query symbol at a time, pruning every
//!    branch whose cost exceeds the edit budget. The result is a superset of
//!    the states that hold a match. It over-approximates because the alphabet
//!    folds characters together and because only the first `index_length`
//!    characters of each string are in the trie.
//! 2. **Verification phase** (`find`): compute the true distance of every
//!    candidate the surviving states hold, through a [`TrieFilter`], and keep
//!    only the candidates within budget.
//!
//! # INVARIANTS
//!
//! 1. **RECALL**: if a registered string is within `D` edits of the query,
//!    its state is in `find_matching_states(query, D)`.
//! 2. **EXACTNESS**: `find(query, D)` returns exactly the registered strings
//!    within `D` edits.
//! 3. **IDEMPOTENCE**: indexing a string twice yields the same state and one
//!    stored association.
//! 4. **INVERSE**: `index([w])` followed by `remove_from_index([w])` leaves no
//!    trie node that only `w` needed.
//!
//! # Truncated strings
//!
//! A string longer than `index_length` ends at a depth-`index_length` state
//! with its tail unseen. During the trie phase such a state can consume query
//! symbols for free, since those symbols may match the tail. Without that the
//! trie phase would charge deletions the verification phase never charges,
//! and recall would break.

use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::data_store::{DataStore, InMemoryDataStore};
use crate::error::{Error, Result};
use crate::fuzzy::{Automaton, TrieFilter};
use crate::state_set::{CostAnnotatedStateSet, StateSet};
use crate::types::{QueryKey, QueryMode, State, Symbol, ROOT};
use crate::verify::contracts::{check_forest, check_frontier_within_budget, check_states_ascending};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, trace};

/// Fuzzy string index over a state-set trie.
///
/// Owns the trie, the data store and the per-query caches. Queries take
/// `&mut self` because they fill those caches; [`reset`](Self::reset) drops
/// them.
#[derive(Debug)]
pub struct StateSetIndex<A: Alphabet, D: DataStore> {
    config: Config,
    alphabet: A,
    state_set: StateSet,
    data_store: D,
    /// string -> final state, filled by `index`
    index_cache: HashMap<String, State>,
    matching_states_cache: HashMap<QueryKey, Vec<State>>,
    trie_filters: HashMap<QueryKey, TrieFilter>,
    /// How many strings longer than `index_length` end at each state
    truncated: HashMap<State, usize>,
}

impl<A: Alphabet> StateSetIndex<A, InMemoryDataStore> {
    /// An empty index backed by an [`InMemoryDataStore`].
    pub fn in_memory(config: Config, alphabet: A) -> Self {
        Self::new(config, alphabet, StateSet::new(), InMemoryDataStore::new())
    }
}

impl<A: Alphabet, D: DataStore> StateSetIndex<A, D> {
    /// Assemble an index from its collaborators.
    ///
    /// `state_set` and `data_store` may already be populated (e.g. restored
    /// from storage); they must have been built with the same `config` and
    /// `alphabet`.
    pub fn new(config: Config, alphabet: A, state_set: StateSet, data_store: D) -> Self {
        let limit = config.index_length();
        let mut truncated: HashMap<State, usize> = HashMap::new();
        for (state, strings) in data_store.all() {
            let count = strings.iter().filter(|s| s.chars().count() > limit).count();
            if count > 0 {
                truncated.insert(state, count);
            }
        }

        check_forest(&state_set, config.alphabet_size());
        Self {
            config,
            alphabet,
            state_set,
            data_store,
            index_cache: HashMap::new(),
            matching_states_cache: HashMap::new(),
            trie_filters: HashMap::new(),
            truncated,
        }
    }

    /// Register strings and return the state each one ends at.
    ///
    /// Only the first `index_length` characters enter the trie; the full
    /// string is stored. Re-indexing a known string changes nothing.
    ///
    /// # Errors
    ///
    /// [`Error::SymbolOutOfRange`] if the alphabet maps a character outside
    /// `1..=alphabet_size`. Strings before the offending one stay indexed.
    pub fn index<I, S>(&mut self, strings: I) -> Result<HashMap<String, State>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut assigned = HashMap::new();
        let mut changed = false;
        let mut created = 0usize;

        for string in strings {
            let string = string.as_ref();
            if let Some(&state) = self.index_cache.get(string) {
                assigned.insert(string.to_string(), state);
                continue;
            }

            let symbols = self.symbols(self.indexed_prefix(string))?;
            let mut state = ROOT;
            for symbol in symbols {
                let next = self.child_state(state, symbol);
                if !self.state_set.contains(next) {
                    self.state_set.add(next, state, symbol);
                    created += 1;
                }
                state = next;
            }

            if self.data_store.add(state, string) {
                changed = true;
                if self.is_truncated(string) {
                    *self.truncated.entry(state).or_insert(0) += 1;
                }
            }
            self.index_cache.insert(string.to_string(), state);
            assigned.insert(string.to_string(), state);
        }

        if changed || created > 0 {
            self.matching_states_cache.clear();
        }
        check_forest(&self.state_set, self.config.alphabet_size());
        debug!(
            strings = assigned.len(),
            new_states = created,
            total_states = self.state_set.len(),
            "indexed"
        );
        Ok(assigned)
    }

    /// Unregister strings and prune trie nodes nothing needs anymore.
    ///
    /// Strings that were never indexed are ignored.
    ///
    /// # Errors
    ///
    /// [`Error::SymbolOutOfRange`] if the alphabet misbehaves while re-walking
    /// a string that is not in the memo table.
    pub fn remove_from_index<I, S>(&mut self, strings: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut removed = 0usize;
        let mut pruned = 0usize;

        for string in strings {
            let string = string.as_ref();
            let state = match self.index_cache.remove(string) {
                Some(state) => state,
                None => match self.walk(string)? {
                    Some(state) => state,
                    None => continue,
                },
            };

            if !self.data_store.remove(state, string) {
                continue;
            }
            removed += 1;

            if self.is_truncated(string) {
                if let Some(count) = self.truncated.get_mut(&state) {
                    *count -= 1;
                    if *count == 0 {
                        self.truncated.remove(&state);
                    }
                }
            }
            pruned += self.prune_from(state);
        }

        if removed > 0 {
            self.matching_states_cache.clear();
        }
        check_forest(&self.state_set, self.config.alphabet_size());
        debug!(strings = removed, pruned_states = pruned, "removed from index");
        Ok(())
    }

    /// Registered strings within `edit_distance` of `query`, without
    /// duplicates, in ascending state order.
    ///
    /// # Errors
    ///
    /// [`Error::SymbolOutOfRange`] if the alphabet misbehaves on the query.
    pub fn find(&mut self, query: &str, edit_distance: usize, mode: QueryMode) -> Result<Vec<String>> {
        let candidates = self.find_accepted_strings(query, edit_distance, mode)?;

        let key = QueryKey::new(query, edit_distance, mode);
        let filter = self
            .trie_filters
            .entry(key)
            .or_insert_with(|| TrieFilter::new(Automaton::new(query, edit_distance, mode.costs())));

        let mut seen = HashSet::new();
        let mut found = Vec::new();
        let mut checked = 0usize;
        for string in candidates.into_values().flatten() {
            if !seen.insert(string.clone()) {
                continue;
            }
            checked += 1;
            if filter.matches(&string) {
                found.push(string);
            }
        }

        debug!(
            query,
            edit_distance,
            ?mode,
            candidates = checked,
            matches = found.len(),
            "find"
        );
        Ok(found)
    }

    /// Every stored string held by a matching state, grouped by state.
    ///
    /// Candidates only: false positives are still in here.
    pub fn find_accepted_strings(
        &mut self,
        query: &str,
        edit_distance: usize,
        mode: QueryMode,
    ) -> Result<BTreeMap<State, Vec<String>>> {
        let states = self.find_matching_states(query, edit_distance, mode)?;
        Ok(self.data_store.get_for_states(&states))
    }

    /// Ascending list of trie states within `edit_distance` of `query`.
    ///
    /// Results are cached per `(query, edit_distance, mode)` until the index
    /// changes or [`reset`](Self::reset) is called.
    pub fn find_matching_states(
        &mut self,
        query: &str,
        edit_distance: usize,
        mode: QueryMode,
    ) -> Result<Vec<State>> {
        let key = QueryKey::new(query, edit_distance, mode);
        if let Some(states) = self.matching_states_cache.get(&key) {
            trace!(query, edit_distance, ?mode, "matching states cache hit");
            return Ok(states.clone());
        }

        // The whole query, not just its first `index_length` characters
        let symbols = self.symbols(query.chars())?;
        let frontier = self.search(&symbols, edit_distance, mode);
        let states = frontier.states();

        check_states_ascending(&states);
        debug!(query, edit_distance, ?mode, states = states.len(), "matched states");
        self.matching_states_cache.insert(key, states.clone());
        Ok(states)
    }

    /// Drop every cache: the string memo, matched states and trie filters.
    ///
    /// The trie and the data store are untouched.
    pub fn reset(&mut self) {
        self.index_cache.clear();
        self.matching_states_cache.clear();
        self.trie_filters.clear();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn alphabet(&self) -> &A {
        &self.alphabet
    }

    pub fn state_set(&self) -> &StateSet {
        &self.state_set
    }

    pub fn data_store(&self) -> &D {
        &self.data_store
    }

    /// Give back the trie and the data store, e.g. to persist them.
    pub fn into_parts(self) -> (StateSet, D) {
        (self.state_set, self.data_store)
    }

    /// The frontier search over the trie.
    ///
    /// Per query symbol `m`, every frontier entry `(state, cost)` spawns:
    /// - `(state, cost + 1)`: `m` deleted from the query. A state holding
    ///   truncated strings keeps `cost` instead.
    /// - `(child, cost)` for the child labelled `m`, `(child, cost + 1)` for
    ///   every other child (match or substitution).
    /// - in `Damerau` mode, `(grandchild, cost + 1)` along the path labelled
    ///   `(next m, m)`, entering the frontier one symbol later.
    ///
    /// Each spawned entry then expands to its descendants at one extra unit
    /// of cost per edge (insertions into the query).
    fn search(&self, symbols: &[Symbol], edit_distance: usize, mode: QueryMode) -> CostAnnotatedStateSet {
        let mut frontier = self.state_set.reachable_states(ROOT, edit_distance, 0);
        let mut swapped = CostAnnotatedStateSet::new();

        for (i, &symbol) in symbols.iter().enumerate() {
            let mut next = CostAnnotatedStateSet::new();
            let mut next_swapped = CostAnnotatedStateSet::new();

            for (state, cost) in frontier.iter() {
                let within = cost < edit_distance;

                if self.truncated.contains_key(&state) {
                    self.state_set.collect_reachable(state, edit_distance, cost, &mut next);
                } else if within {
                    self.state_set.collect_reachable(state, edit_distance, cost + 1, &mut next);
                }

                for child in self.state_set.children_of(state) {
                    let exact = self.symbol_of(child) == Some(symbol);
                    if exact {
                        self.state_set.collect_reachable(child, edit_distance, cost, &mut next);
                    } else if within {
                        self.state_set.collect_reachable(child, edit_distance, cost + 1, &mut next);
                    }
                }

                if mode.transpositions() && within {
                    if let Some(&following) = symbols.get(i + 1) {
                        for first in self.state_set.children_of(state) {
                            if self.symbol_of(first) != Some(following) {
                                continue;
                            }
                            for second in self.state_set.children_of(first) {
                                if self.symbol_of(second) == Some(symbol) {
                                    next_swapped.add(second, cost + 1);
                                }
                            }
                        }
                    }
                }
            }

            for (state, cost) in swapped.iter() {
                self.state_set.collect_reachable(state, edit_distance, cost, &mut next);
            }

            trace!(step = i, frontier = next.len(), pending_swaps = next_swapped.len(), "search step");
            frontier = next;
            swapped = next_swapped;
        }

        check_frontier_within_budget(&frontier, edit_distance);
        frontier
    }

    /// The characters of `string` that enter the trie.
    fn indexed_prefix<'s>(&self, string: &'s str) -> impl Iterator<Item = char> + 's {
        string.chars().take(self.config.index_length())
    }

    fn symbols(&self, characters: impl Iterator<Item = char>) -> Result<Vec<Symbol>> {
        let alphabet_size = self.config.alphabet_size();
        characters
            .map(|character| {
                let symbol = self.alphabet.map(character, alphabet_size);
                if (1..=alphabet_size).contains(&symbol) {
                    Ok(symbol)
                } else {
                    Err(Error::SymbolOutOfRange {
                        character,
                        symbol,
                        alphabet_size,
                    })
                }
            })
            .collect()
    }

    /// Follow `string` through the existing trie without extending it.
    fn walk(&self, string: &str) -> Result<Option<State>> {
        let mut state = ROOT;
        for symbol in self.symbols(self.indexed_prefix(string))? {
            state = self.child_state(state, symbol);
            if !self.state_set.contains(state) {
                return Ok(None);
            }
        }
        Ok(Some(state))
    }

    /// Delete `state` and its ancestors for as long as nothing needs them.
    fn prune_from(&mut self, mut state: State) -> usize {
        let mut pruned = 0;
        while state != ROOT
            && !self.state_set.has_children(state)
            && !self.data_store.accepts(state)
            && !self.truncated.contains_key(&state)
        {
            let Some(parent) = self.state_set.parent_of(state) else {
                break;
            };
            pruned += self.state_set.remove(state);
            state = parent;
        }
        pruned
    }

    #[inline]
    fn child_state(&self, parent: State, symbol: Symbol) -> State {
        // Cannot overflow: depth <= index_length and Config bounds the deepest state.
        parent * State::from(self.config.alphabet_size()) + State::from(symbol)
    }

    #[inline]
    fn symbol_of(&self, state: State) -> Option<Symbol> {
        self.state_set.char_for_state(state).ok()
    }

    fn is_truncated(&self, string: &str) -> bool {
        string.chars().nth(self.config.index_length()).is_some()
    }
}
