// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-operation edit costs.

use crate::error::{Error, Result};

/// Costs of the four edit operations, from the point of view of turning the
/// first string into the second.
///
/// `transposition` is `None` for plain Levenshtein. Every cost is at least 1,
/// which is what lets the distance function restrict itself to a diagonal
/// corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditCosts {
    insertion: usize,
    replacement: usize,
    deletion: usize,
    transposition: Option<usize>,
}

impl EditCosts {
    /// Unit costs, no transpositions.
    pub const LEVENSHTEIN: Self = Self {
        insertion: 1,
        replacement: 1,
        deletion: 1,
        transposition: None,
    };

    /// Unit costs including adjacent transpositions.
    pub const DAMERAU: Self = Self {
        insertion: 1,
        replacement: 1,
        deletion: 1,
        transposition: Some(1),
    };

    pub fn new(
        insertion: usize,
        replacement: usize,
        deletion: usize,
        transposition: Option<usize>,
    ) -> Result<Self> {
        if insertion == 0 {
            return Err(Error::ZeroCost("insertion"));
        }
        if replacement == 0 {
            return Err(Error::ZeroCost("replacement"));
        }
        if deletion == 0 {
            return Err(Error::ZeroCost("deletion"));
        }
        if transposition == Some(0) {
            return Err(Error::ZeroCost("transposition"));
        }
        Ok(Self {
            insertion,
            replacement,
            deletion,
            transposition,
        })
    }

    pub fn insertion(&self) -> usize {
        self.insertion
    }

    pub fn replacement(&self) -> usize {
        self.replacement
    }

    pub fn deletion(&self) -> usize {
        self.deletion
    }

    pub fn transposition(&self) -> Option<usize> {
        self.transposition
    }

    /// Costs for the reverse direction: insertions become deletions.
    ///
    /// `distance(a, b, costs) == distance(b, a, costs.reversed())`.
    pub fn reversed(self) -> Self {
        Self {
            insertion: self.deletion,
            deletion: self.insertion,
            ..self
        }
    }

    /// Same costs with every operation multiplied by `factor` (at least 1).
    pub fn scaled(self, factor: usize) -> Self {
        let factor = factor.max(1);
        Self {
            insertion: self.insertion.saturating_mul(factor),
            replacement: self.replacement.saturating_mul(factor),
            deletion: self.deletion.saturating_mul(factor),
            transposition: self.transposition.map(|cost| cost.saturating_mul(factor)),
        }
    }
}
