//! Ranking: best score first, ties in feed order.

use super::common::{blog_feed, build_index, make_doc, titles};

#[test]
fn exact_hit_beats_typo() {
    // Feed order puts the weaker match first
    let index = build_index(vec![
        make_doc("Abject Failure", &[]),
        make_doc("Null Object", &[]),
    ]);
    assert_eq!(titles(&index, "object"), vec!["Null Object", "Abject Failure"]);
}

#[test]
fn shorter_field_wins_on_equal_hits() {
    let index = build_index(vec![
        make_doc("Notes on Rust and a few other things", &[]),
        make_doc("Rust", &[]),
    ]);
    assert_eq!(titles(&index, "rust")[0], "Rust");
}

#[test]
fn more_matching_fields_rank_higher() {
    let index = build_index(vec![
        make_doc("Testing Private Methods", &["Misc"]),
        make_doc("Testing Private Methods", &["Testing"]),
    ]);
    let results = index.search("testing");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].document_index, 1);
    assert!(results[0].score < results[1].score);
}

#[test]
fn ties_keep_feed_order() {
    let index = build_index(vec![
        make_doc("Null Object", &["Patterns"]),
        make_doc("Null Object", &["Patterns"]),
        make_doc("Null Object", &["Patterns"]),
    ]);
    let order: Vec<usize> = index
        .search("null object")
        .iter()
        .map(|r| r.document_index)
        .collect();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn scores_are_non_decreasing() {
    let index = build_index(blog_feed());
    for query in ["compose", "method", "design", "testing", "rust"] {
        let results = index.search(query);
        assert!(
            results.windows(2).all(|w| w[0].score <= w[1].score),
            "unsorted results for {:?}",
            query
        );
    }
}

#[test]
fn prefix_query_prefers_the_exact_stem() {
    let index = build_index(blog_feed());
    let found = titles(&index, "compose");
    assert_eq!(found[0], "Composed Method");
    assert_eq!(found[1], "Composition over Inheritance");
}
