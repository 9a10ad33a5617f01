// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded Damerau-Levenshtein distance with a diagonal corridor.
//!
//! The key insight: a caller who only cares about distances up to `max` never
//! needs the full O(nm) matrix. A cell that sits `k` diagonals away from both
//! the start and the end of the path already costs more than `max`, so only a
//! corridor of about `2 * max + 1` diagonals is computed:
//!
//! ```text
//! max = 2, a = "abcdefg", b = "acedfgh"
//!
//!       a  c  e  d  f  g  h
//!    0  1  .  .  .  .  .  .
//! a  1  0  1  .  .  .  .  .
//! b  .  1  1  2  .  .  .  .
//! c  .  .  1  2  3  .  .  .
//! d  .  .  .  2  2  3  .  .
//! ```
//!
//! Three more cheap exits sit in front of the corridor:
//! 1. Identical strings are 0 without allocating.
//! 2. Common prefixes and suffixes never change the distance and are stripped.
//! 3. If the length difference alone reaches `max`, the answer is `max`.
//!
//! Inside the corridor, once a whole row has reached `max` the result cannot
//! come back down and the computation stops. With transpositions enabled the
//! previous row has to agree, since a transposition jumps two rows at once.
//!
//! Every distance is counted in `char`s, not bytes.

use super::costs::EditCosts;
use crate::error::Result;

/// Distance between `a` and `b`, clamped to `max_distance`.
///
/// Returns 0 only for identical strings (or when `max_distance` is 0). The
/// result equals `min(true_distance, max_distance)` for any `max_distance`.
pub fn bounded_distance(a: &str, b: &str, max_distance: usize, costs: EditCosts) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    corridor_distance(&a, &b, max_distance, costs)
}

/// [`bounded_distance`] over raw bytes, rejecting malformed UTF-8 instead of
/// computing a distance over garbage.
pub fn bounded_distance_utf8(
    a: &[u8],
    b: &[u8],
    max_distance: usize,
    costs: EditCosts,
) -> Result<usize> {
    let a = std::str::from_utf8(a)?;
    let b = std::str::from_utf8(b)?;
    Ok(bounded_distance(a, b, max_distance, costs))
}

/// Unbounded unit-cost Levenshtein distance.
pub fn levenshtein(a: &str, b: &str) -> usize {
    bounded_distance(a, b, usize::MAX, EditCosts::LEVENSHTEIN)
}

/// Unbounded unit-cost distance counting adjacent transpositions as one edit.
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    bounded_distance(a, b, usize::MAX, EditCosts::DAMERAU)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    bounded_distance(a, b, max.saturating_add(1), EditCosts::LEVENSHTEIN) <= max
}

fn strip_common_affixes<'a>(a: &'a [char], b: &'a [char]) -> (&'a [char], &'a [char]) {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    (&a[..a.len() - suffix], &b[..b.len() - suffix])
}

/// Row-by-row DP over diagonals `k = column - row` in `[low, high]`.
///
/// Cells outside the corridor (and outside the matrix) read as the ceiling.
/// Stored values are clamped to the ceiling, which keeps the arithmetic from
/// overflowing and does not change `min(true, ceiling)`.
pub(crate) fn corridor_distance(
    a: &[char],
    b: &[char],
    max_distance: usize,
    costs: EditCosts,
) -> usize {
    let (a, b) = strip_common_affixes(a, b);
    let (n, m) = (a.len(), b.len());

    // Deleting all of `a` and inserting all of `b` bounds the true distance.
    let upper = n
        .saturating_mul(costs.deletion())
        .saturating_add(m.saturating_mul(costs.insertion()));
    let ceiling = max_distance.min(upper);

    // Each insertion/deletion costs at least 1.
    if n.abs_diff(m) >= ceiling {
        return ceiling;
    }

    let target = m as isize - n as isize;
    let budget = isize::try_from(ceiling).unwrap_or(isize::MAX);
    let high = (budget.saturating_add(target) / 2).min(m as isize);
    let low = (-(budget.saturating_sub(target) / 2)).max(-(n as isize));
    let width = (high - low + 1) as usize;

    let column = |row: usize, j: usize| row as isize + low + j as isize;

    let mut before = vec![ceiling; width];
    let mut previous = vec![ceiling; width];
    let mut current = vec![ceiling; width];

    for j in 0..width {
        let col = column(0, j);
        if (0..=m as isize).contains(&col) {
            previous[j] = (col as usize).saturating_mul(costs.insertion()).min(ceiling);
        }
    }
    let mut previous_min = 0;

    for row in 1..=n {
        current.fill(ceiling);
        let mut row_min = ceiling;

        for j in 0..width {
            let col = column(row, j);
            if col < 0 || col > m as isize {
                continue;
            }
            if col == 0 {
                current[j] = row.saturating_mul(costs.deletion()).min(ceiling);
                row_min = row_min.min(current[j]);
                continue;
            }
            let col = col as usize;

            let replacement = if a[row - 1] == b[col - 1] { 0 } else { costs.replacement() };
            let mut value = previous[j].saturating_add(replacement);
            if j + 1 < width {
                value = value.min(previous[j + 1].saturating_add(costs.deletion()));
            }
            if j >= 1 {
                value = value.min(current[j - 1].saturating_add(costs.insertion()));
            }
            if let Some(transposition) = costs.transposition() {
                if row >= 2 && col >= 2 && a[row - 1] == b[col - 2] && a[row - 2] == b[col - 1] {
                    value = value.min(before[j].saturating_add(transposition));
                }
            }

            current[j] = value.min(ceiling);
            row_min = row_min.min(current[j]);
        }

        // Early-exit: the distance can only grow from here
        if row_min >= ceiling && (costs.transposition().is_none() || previous_min >= ceiling) {
            return ceiling;
        }

        std::mem::swap(&mut before, &mut previous);
        std::mem::swap(&mut previous, &mut current);
        previous_min = row_min;
    }

    previous[(target - low) as usize].min(ceiling)
}
