// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Every field value that matches contributes an error ratio `edits / query_len`,
//! plus a proximity penalty `|start - location| / distance` for how far into the
//! value the match begins. A value matches when that sum stays within the
//! threshold; with the defaults (location 0, distance 100, threshold 0.3) a
//! perfect hit must start within the first 30 characters.
//!
//! A document's score is the product of those per-value scores, each raised to
//! the value's field-length norm. Products only shrink, so a post that matches in its title
//! *and* a category outranks one that matches in the title alone, and a short
//! title match outweighs the same match buried in a long excerpt.
//!
//! # Key Invariant: Score Range
//!
//! ```text
//! 0.0 < field_score ^ norm <= 1.0   (norm in (0, 1], field_score in [EPSILON, 1])
//! ```
//!
//! so the product also stays in `(0, 1]`. Fuzzy matches are floored at
//! [`MIN_MATCH_SCORE`]. Only a value equal to the query scores 0, and that is
//! clamped to `f64::EPSILON` here; otherwise one exact value would zero the
//! product and erase whatever the document's other matches add.

/// Score of a value that does not match at all.
pub const NO_MATCH_SCORE: f64 = 1.0;

/// Default fuzziness threshold: tolerate roughly one typo per three characters.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Where in a value a match is expected to start.
pub const DEFAULT_LOCATION: usize = 0;

/// How many characters from `location` cost a full point of score.
pub const DEFAULT_DISTANCE: usize = 100;

/// Floor for fuzzy-matched values. Only a value equal to the query scores 0.
pub const MIN_MATCH_SCORE: f64 = 0.001;

/// Error ratio for one field value.
///
/// `edits` is the smallest substring edit distance; `query_len` is in chars.
#[inline]
pub fn field_score(edits: usize, query_len: usize) -> f64 {
    if query_len == 0 {
        return 0.0;
    }
    (edits as f64 / query_len as f64).min(NO_MATCH_SCORE)
}

/// Error ratio plus proximity penalty for a match starting at `start`.
///
/// With `distance == 0` only a match exactly at `location` counts.
#[inline]
pub fn location_score(
    edits: usize,
    query_len: usize,
    start: usize,
    location: usize,
    distance: usize,
) -> f64 {
    let accuracy = field_score(edits, query_len);
    let proximity = start.abs_diff(location);
    if distance == 0 {
        return if proximity == 0 {
            accuracy
        } else {
            NO_MATCH_SCORE
        };
    }
    accuracy + proximity as f64 / distance as f64
}

/// Fold one matched value into a running document score.
///
/// Start from `1.0` and call once per matching value.
#[inline]
pub fn combine(total: f64, score: f64, norm: f64) -> f64 {
    let base = if score == 0.0 { f64::EPSILON } else { score };
    total * base.powf(norm)
}
