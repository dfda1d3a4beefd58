// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring matching with an early-exit optimization.
//!
//! A query matches a field when it appears *somewhere inside* the value with a few
//! typos, not when the whole value is within a few edits of the query. That is
//! Sellers' variant of the Levenshtein DP: the first row is all zeros, so a match
//! may start at any position in the text, and the answer is the minimum of the
//! last row.
//!
//! Two early exits keep it cheap: an exact substring skips the DP entirely, and
//! a text shorter than `pattern - max` characters can never contain a match.

/// Smallest number of edits needed to find `pattern` inside `text`.
///
/// Returns `None` when no substring of `text` is within `max` edits.
/// Both inputs are compared by Unicode scalar value; callers normalize first.
///
/// An empty pattern trivially matches with zero edits.
pub fn substring_distance(pattern: &str, text: &str, max: usize) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    if text.contains(pattern) {
        return Some(0);
    }
    if max == 0 {
        return None;
    }

    let pattern: Vec<char> = pattern.chars().collect();
    let m = pattern.len();

    // Fewer than m - max characters can never absorb the pattern
    let text_len = text.chars().count();
    if text_len + max < m {
        return None;
    }

    // column[i] = edits to match pattern[..i] ending at the current text position
    let mut column: Vec<usize> = (0..=m).collect();
    let mut best = column[m];

    for tc in text.chars() {
        let mut diagonal = column[0];
        // Free start: a match may begin at any text position
        column[0] = 0;

        for i in 1..=m {
            let above = column[i];
            let cost = usize::from(pattern[i - 1] != tc);
            column[i] = (above + 1).min(column[i - 1] + 1).min(diagonal + cost);
            diagonal = above;
        }

        best = best.min(column[m]);
        if best == 0 {
            break;
        }
    }

    (best <= max).then_some(best)
}

/// Fewest edits for `pattern` to match a substring of `text` starting at each
/// char position.
///
/// Entry `p` covers substrings that begin exactly at `p`; `None` marks starts
/// that need more than `max` edits. This is the same DP as
/// [`substring_distance`] run over both strings reversed, so the free end of a
/// match becomes its start.
pub fn start_distances(pattern: &str, text: &str, max: usize) -> Vec<Option<usize>> {
    let text: Vec<char> = text.chars().collect();
    let n = text.len();
    let mut starts = vec![None; n];

    let pattern: Vec<char> = pattern.chars().rev().collect();
    let m = pattern.len();
    if m == 0 {
        starts.fill(Some(0));
        return starts;
    }
    if n + max < m {
        return starts;
    }

    let mut column: Vec<usize> = (0..=m).collect();
    for (j, &tc) in text.iter().rev().enumerate() {
        let mut diagonal = column[0];
        column[0] = 0;

        for i in 1..=m {
            let above = column[i];
            let cost = usize::from(pattern[i - 1] != tc);
            column[i] = (above + 1).min(column[i - 1] + 1).min(diagonal + cost);
            diagonal = above;
        }

        if column[m] <= max {
            starts[n - 1 - j] = Some(column[m]);
        }
    }

    starts
}

/// Maximum edits a query of `pattern_len` characters may carry under `threshold`.
///
/// The score of a match is `edits / pattern_len`; it must not exceed the
/// threshold, so the budget is `floor(threshold * pattern_len)`.
pub fn edit_budget(pattern_len: usize, threshold: f64) -> usize {
    if pattern_len == 0 || threshold.is_nan() || threshold <= 0.0 {
        return 0;
    }
    // Guard against 0.3 * 10 = 2.9999999999999996
    ((threshold * pattern_len as f64) + 1e-9).floor() as usize
}
