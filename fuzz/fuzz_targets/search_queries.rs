// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the keystroke path to verify it never
//! panics, never reports a document that does not exist, and never shows more
//! rows than the dropdown allows.

#![no_main]

use lantern::testing::composed_method;
use lantern::widgets::{plan_results, ResultsView};
use lantern::{IndexOptions, IndexState, SearchDocument, SearchIndex, SearchLimits};
use libfuzzer_sys::fuzz_target;

fn corpus() -> Vec<SearchDocument> {
    let mut docs = vec![composed_method()];
    for (i, title) in ["Null Object", "Café Culture", "日本語のノート", "Ünïcödé Tëst"]
        .iter()
        .enumerate()
    {
        docs.push(lantern::testing::make_doc(title, &["Misc", "Désign"][..=i % 2]));
    }
    docs
}

fuzz_target!(|query: &[u8]| {
    static STATE: std::sync::OnceLock<IndexState> = std::sync::OnceLock::new();
    let state = STATE.get_or_init(|| {
        IndexState::Ready(SearchIndex::new(corpus(), IndexOptions::default()).unwrap())
    });
    let Some(index) = state.index() else {
        return;
    };

    // Convert to string, handling invalid UTF-8
    let query = String::from_utf8_lossy(query);

    for result in index.search(&query) {
        assert!(result.document_index < index.len());
        assert!(result.score.is_finite());
        assert!((0.0..=1.0).contains(&result.score));
    }

    let limits = SearchLimits::default();
    if let ResultsView::Matches(hits) = plan_results(&query, state, &limits) {
        assert!(!hits.is_empty());
        assert!(hits.len() <= limits.max_results);
    }
});
