//! Shared test utilities and fixtures.

#![allow(dead_code)]

use lantern::testing::{FakeField, FakePanel};
use lantern::widgets::SearchBinding;
use lantern::{IndexOptions, IndexState, Messages, SearchDocument, SearchIndex, SearchLimits};

// Re-export canonical test utilities from lantern::testing
#[allow(unused_imports)]
pub use lantern::testing::{composed_method, make_doc, make_full_doc};

pub type FakeBinding = SearchBinding<FakeField, FakePanel>;

// ============================================================================
// FEEDS
// ============================================================================

/// A small archive spanning a few categories, in feed order.
pub fn blog_feed() -> Vec<SearchDocument> {
    vec![
        make_full_doc(
            "Composed Method",
            "Breaking down a method into smaller intention-revealing steps.",
            "/composed-method",
            "Feb 28, 2016",
            &["Design Patterns"],
        ),
        make_full_doc(
            "Null Object",
            "Replacing conditional checks with a do-nothing collaborator.",
            "/null-object",
            "Mar 14, 2016",
            &["Design Patterns"],
        ),
        make_full_doc(
            "Testing Private Methods",
            "Why the urge to test a private method is a design smell.",
            "/testing-private-methods",
            "Jun 2, 2017",
            &["Testing"],
        ),
        make_full_doc(
            "Notes on Rust Lifetimes",
            "Borrowing, ownership and the shapes the compiler accepts.",
            "/rust-lifetimes",
            "Sep 9, 2021",
            &["Rust", "Languages"],
        ),
        make_full_doc(
            "Composition over Inheritance",
            "A short history of a well-worn slogan.",
            "/composition-over-inheritance",
            "Jan 5, 2019",
            &["Design Patterns", "Opinion"],
        ),
        make_full_doc(
            "Café Culture and Code Review",
            "What a barista taught me about feedback.",
            "/cafe-code-review",
            "Apr 20, 2020",
            &["Culture"],
        ),
    ]
}

/// Serialize documents into a feed body.
pub fn feed_json(docs: &[SearchDocument]) -> String {
    serde_json::to_string(docs).expect("feed serializes")
}

pub fn build_index(docs: Vec<SearchDocument>) -> SearchIndex {
    SearchIndex::new(docs, IndexOptions::default()).expect("default options are valid")
}

pub fn ready(docs: Vec<SearchDocument>) -> IndexState {
    IndexState::Ready(build_index(docs))
}

/// Titles of the results for `query`, best first.
pub fn titles(index: &SearchIndex, query: &str) -> Vec<String> {
    index
        .search(query)
        .iter()
        .map(|r| index.documents()[r.document_index].title.clone())
        .collect()
}

// ============================================================================
// BINDINGS
// ============================================================================

pub fn binding() -> FakeBinding {
    SearchBinding::new(
        FakeField::default(),
        FakePanel::default(),
        SearchLimits::default(),
        Messages::default(),
    )
}

/// Type `query` into the binding's field and fire the input handler.
pub fn type_query(binding: &FakeBinding, state: &IndexState, query: &str) {
    binding.field().type_text(query);
    binding.handle_input(state);
}
