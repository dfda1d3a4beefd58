//! The blog's acceptance scenarios, end to end through the planner.

use super::common::{build_index, composed_method, ready, titles};
use lantern::widgets::{plan_results, ResultHit, ResultsView};
use lantern::{SearchLimits, DEFAULT_THRESHOLD};

#[test]
fn compose_finds_composed_method() {
    let index = build_index(vec![composed_method()]);
    let results = index.search("compose");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document_index, 0);
    assert!(results[0].score < DEFAULT_THRESHOLD);
}

#[test]
fn compose_renders_the_post() {
    let state = ready(vec![composed_method()]);
    let view = plan_results("compose", &state, &SearchLimits::default());

    assert_eq!(
        view,
        ResultsView::Matches(vec![ResultHit {
            title: "Composed Method".to_string(),
            excerpt: "Breaking down a method...".to_string(),
            date: "Feb 28, 2016".to_string(),
            url: "/composed-method".to_string(),
        }])
    );
}

#[test]
fn unrelated_query_renders_no_results() {
    let state = ready(vec![composed_method()]);
    let index = state.index().expect("ready");

    assert!(index.search("zzzzz").is_empty());
    assert_eq!(
        plan_results("zzzzz", &state, &SearchLimits::default()),
        ResultsView::Empty
    );
}

#[test]
fn single_character_renders_nothing() {
    let state = ready(vec![composed_method()]);
    assert_eq!(
        plan_results("c", &state, &SearchLimits::default()),
        ResultsView::Hidden
    );
}

#[test]
fn typo_still_matches() {
    let index = build_index(vec![composed_method()]);
    assert_eq!(titles(&index, "metod"), vec!["Composed Method"]);
    assert_eq!(titles(&index, "compse"), vec!["Composed Method"]);
}

#[test]
fn category_names_are_searchable() {
    let index = build_index(vec![composed_method()]);
    assert_eq!(titles(&index, "design patterns"), vec!["Composed Method"]);
}
