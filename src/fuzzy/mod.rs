// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! One routine does the heavy lifting: how many edits does it take to find the
//! query inside a field value? The threshold turns that count into a yes/no,
//! and the scoring module turns it into a rank.

mod levenshtein;

pub use levenshtein::*;
