// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts over the trie and the search.
//!
//! The contracts panic in debug builds when an invariant is violated and
//! compile to nothing in release. The index calls them after every mutation
//! and every query, so any test that exercises the index also checks them.

pub mod contracts;
