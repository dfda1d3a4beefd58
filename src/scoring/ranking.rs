// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Lower scores first. Equal scores fall back to feed order, which for a blog
//! feed is usually newest first, so ties favour recent posts.

use crate::types::ScoredDocument;
use std::cmp::Ordering;

/// Compare two scored documents for ranking.
///
/// Sort order:
/// 1. **Score** - ascending (0.0 is a perfect match)
/// 2. **Document index** - feed order, for determinism
pub fn compare_results(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    match a.score.partial_cmp(&b.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.document_index.cmp(&b.document_index),
    }
}

/// Sort a result list in place, best first.
pub fn rank(results: &mut [ScoredDocument]) {
    results.sort_by(compare_results);
}
