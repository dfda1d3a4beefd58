// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: score every document against the query, keep the ones under the
//! threshold, rank them.
//!
//! The query is normalized the same way the index values were, so case,
//! spacing and diacritics never cost edits. The whole trimmed query is one
//! pattern; words are not split and matched separately.
//!
//! A value equal to the query scores 0. Any other match is priced by its edits
//! plus how far from `location` it starts, and floored at [`MIN_MATCH_SCORE`].

use crate::fuzzy::{edit_budget, start_distances, substring_distance};
use crate::index::{IndexOptions, IndexedValue, SearchIndex};
use crate::scoring::ranking::rank;
use crate::scoring::{combine, field_score, location_score, MIN_MATCH_SCORE};
use crate::types::{QueryResult, ScoredDocument};
use crate::utils::normalize;

/// Every document matching `query`, best first.
///
/// Empty or whitespace-only queries match nothing.
pub fn search(index: &SearchIndex, query: &str) -> QueryResult {
    let pattern = normalize(query);
    if pattern.is_empty() {
        return Vec::new();
    }

    let pattern_len = pattern.chars().count();
    let options = index.options();
    let budget = edit_budget(pattern_len, options.threshold);

    let mut results: QueryResult = index
        .values
        .iter()
        .enumerate()
        .filter_map(|(document_index, values)| {
            score_document(values, &pattern, pattern_len, budget, options).map(|score| {
                ScoredDocument {
                    document_index,
                    score,
                }
            })
        })
        .collect();

    rank(&mut results);
    results
}

/// Combined score over every matching value, or `None` if nothing matched.
fn score_document(
    values: &[IndexedValue],
    pattern: &str,
    pattern_len: usize,
    budget: usize,
    options: &IndexOptions,
) -> Option<f64> {
    let mut total = 1.0;
    let mut matched = false;

    for value in values {
        if let Some(score) = score_value(&value.text, pattern, pattern_len, budget, options) {
            matched = true;
            total = combine(total, score, value.norm);
        }
    }

    matched.then_some(total)
}

/// Score of one value, or `None` when no placement stays within the threshold.
fn score_value(
    text: &str,
    pattern: &str,
    pattern_len: usize,
    budget: usize,
    options: &IndexOptions,
) -> Option<f64> {
    if text == pattern {
        return Some(0.0);
    }

    let best = if options.ignore_location {
        field_score(substring_distance(pattern, text, budget)?, pattern_len)
    } else {
        start_distances(pattern, text, budget)
            .into_iter()
            .enumerate()
            .filter_map(|(start, edits)| {
                let edits = edits?;
                Some(location_score(
                    edits,
                    pattern_len,
                    start,
                    options.location,
                    options.distance,
                ))
            })
            .min_by(f64::total_cmp)?
    };

    (best <= options.threshold).then_some(best.max(MIN_MATCH_SCORE))
}
