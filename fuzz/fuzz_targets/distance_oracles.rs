// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the distance functions.
//!
//! The corridor distance and the automaton are two independent routes to the
//! same number. If they disagree, one of them lies, and the index inherits
//! the lie in its verification phase.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use state_set_index::{bounded_distance, Automaton, EditCosts};

/// Fuzz input for distance cross-checking
#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    max_distance: u8,
    insertion: u8,
    replacement: u8,
    deletion: u8,
    transposition: Option<u8>,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let a: String = input.a.chars().take(40).collect();
    let b: String = input.b.chars().take(40).collect();
    let max = usize::from(input.max_distance % 16);

    let cost = |c: u8| usize::from(c % 4) + 1;
    let Ok(costs) = EditCosts::new(
        cost(input.insertion),
        cost(input.replacement),
        cost(input.deletion),
        input.transposition.map(cost),
    ) else {
        return;
    };

    let distance = bounded_distance(&a, &b, max, costs);

    // INVARIANT 1: the result is clamped to the budget
    assert!(distance <= max, "distance {} exceeds budget {}", distance, max);

    // INVARIANT 2: reversing the arguments swaps insertion and deletion
    assert_eq!(
        distance,
        bounded_distance(&b, &a, max, costs.reversed()),
        "asymmetric distance for a={:?}, b={:?}",
        a,
        b
    );

    // INVARIANT 3: identical strings are at distance 0
    if a == b {
        assert_eq!(distance, 0);
    }

    // INVARIANT 4: the automaton agrees on membership and cost
    let automaton = Automaton::new(&a, max, costs);
    let state = b.chars().fold(automaton.start(), |state, c| automaton.step(&state, c));
    let exact = bounded_distance(&a, &b, max + 1, costs);
    assert_eq!(
        automaton.distance(&state),
        (exact <= max).then_some(exact),
        "automaton disagrees for a={:?}, b={:?}, max={}",
        a,
        b,
        max
    );
});
