// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the state-set index.
//!
//! Every check is a `debug_assert!`: zero-cost in release builds, early
//! failure in development.
//!
//! | Contract Function               | Property                                      |
//! |---------------------------------|-----------------------------------------------|
//! | `check_forest`                  | every edge is `state = parent * A + symbol`    |
//! | `check_frontier_within_budget`  | no frontier cost exceeds the edit distance     |
//! | `check_states_ascending`        | matching states are strictly increasing        |

use crate::state_set::{CostAnnotatedStateSet, StateSet};
use crate::types::{State, Symbol, ROOT};

// ============================================================================
// TRIE CONTRACTS
// ============================================================================

/// Check that the trie is a well-formed forest under the path encoding.
///
/// For each edge `parent -> state` labelled `symbol`:
/// - `symbol` lies in `1..=alphabet_size`
/// - `state == parent * alphabet_size + symbol`
/// - `parent` is the root or itself a known state
/// - `parent` lists `state` among its children
///
/// # Panics (debug builds only)
/// Panics on the first edge that breaks one of the above.
#[inline]
pub fn check_forest(state_set: &StateSet, alphabet_size: Symbol) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (state, parent, symbol) in state_set.edges() {
        debug_assert!(
            (1..=alphabet_size).contains(&symbol),
            "Contract violation: edge into {} has symbol {} outside 1..={}",
            state,
            symbol,
            alphabet_size
        );
        debug_assert!(
            parent
                .checked_mul(State::from(alphabet_size))
                .and_then(|base| base.checked_add(State::from(symbol)))
                == Some(state),
            "Contract violation: state {} is not {} * {} + {}",
            state,
            parent,
            alphabet_size,
            symbol
        );
        debug_assert!(
            state_set.contains(parent),
            "Contract violation: state {} hangs off unknown parent {}",
            state,
            parent
        );
        debug_assert!(
            state_set.children_of(parent).any(|child| child == state),
            "Contract violation: parent {} does not list child {}",
            parent,
            state
        );
    }
    debug_assert!(
        state_set.parent_of(ROOT).is_none(),
        "Contract violation: the root has a parent"
    );
}

// ============================================================================
// SEARCH CONTRACTS
// ============================================================================

/// Check that every state in a search frontier is within the edit budget.
///
/// # Panics (debug builds only)
/// Panics if some state carries a cost above `edit_distance`.
#[inline]
pub fn check_frontier_within_budget(frontier: &CostAnnotatedStateSet, edit_distance: usize) {
    for (state, cost) in frontier.iter() {
        debug_assert!(
            cost <= edit_distance,
            "Contract violation: frontier state {} at cost {} > budget {}",
            state,
            cost,
            edit_distance
        );
    }
}

/// Check that a state list is strictly ascending (sorted, no duplicates).
///
/// # Panics (debug builds only)
/// Panics at the first out-of-order pair.
#[inline]
pub fn check_states_ascending(states: &[State]) {
    for (i, pair) in states.windows(2).enumerate() {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: states[{}] = {} >= states[{}] = {}",
            i,
            pair[0],
            i + 1,
            pair[1]
        );
    }
}
