//! Widget state machine properties.

use super::common::{binding, blog_feed, make_doc, ready, type_query};
use lantern::testing::{FakeCheckbox, FakeStore, FakeThemeSurface};
use lantern::widgets::{
    plan_results, ClickTarget, IndexLoader, ResultRow, ResultsView, SidebarDismissal,
    SidebarToggle, ThemeController,
};
use lantern::{IndexState, LoadError, SearchLimits, ThemePreference};
use proptest::prelude::*;

fn state_strategy() -> impl Strategy<Value = u8> {
    0u8..3
}

fn state_from(tag: u8) -> IndexState {
    match tag {
        0 => IndexState::Loading,
        1 => IndexState::Unavailable,
        _ => ready(blog_feed()),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Queries under two characters (after trimming) always end hidden and empty.
    #[test]
    fn prop_short_query_hides(
        query in "[ ]{0,3}[a-zA-Z]?[ ]{0,3}",
        tag in state_strategy(),
    ) {
        let binding = binding();
        type_query(&binding, &state_from(tag), &query);

        prop_assert!(!binding.panel().is_shown());
        prop_assert!(binding.panel().rows().is_empty());
    }

    /// Rendered hits = min(5, matches), in rank order.
    #[test]
    fn prop_hit_count_is_capped(copies in 0usize..12, query in "[a-z]{2,6}") {
        let docs = (0..copies)
            .map(|n| make_doc(&format!("{} post {}", query, n), &[]))
            .collect();
        let state = ready(docs);
        let matches = state.index().map(|i| i.search(&query).len()).unwrap_or(0);

        match plan_results(&query, &state, &SearchLimits::default()) {
            ResultsView::Matches(hits) => prop_assert_eq!(hits.len(), matches.min(5)),
            ResultsView::Empty => prop_assert_eq!(matches, 0),
            other => prop_assert!(false, "unexpected view {:?}", other),
        }
    }

    /// A failed load leaves every input disabled and typing renders nothing.
    #[test]
    fn prop_failure_disables(pairs in 1usize..4, query in "[a-z ]{0,12}", status in 400u16..600) {
        let bindings: Vec<_> = (0..pairs).map(|_| binding()).collect();
        let state = IndexLoader::settle(Err(LoadError::Http { status }), bindings.iter());

        for binding in &bindings {
            prop_assert!(binding.field().is_disabled());
            type_query(binding, &state, &query);
            prop_assert!(!binding.panel().is_shown());
        }
    }

    /// The loading row is the only row while the feed is in flight.
    #[test]
    fn prop_loading_is_single_row(query in "[a-z]{2,10}") {
        let binding = binding();
        type_query(&binding, &IndexState::Loading, &query);

        let rows = binding.panel().rows();
        prop_assert_eq!(rows.len(), 1);
        prop_assert!(matches!(rows[0], ResultRow::Loading(_)));
    }

    /// Toggling twice restores both the page and storage.
    #[test]
    fn prop_double_toggle_is_identity(start_light in any::<bool>(), extra in 0usize..3) {
        let stored = if start_light { "light" } else { "dark" };
        let controller = ThemeController::new(
            FakeStore::with("theme", stored),
            FakeThemeSurface::default(),
            "theme",
            ThemePreference::Dark,
        );
        let initial = controller.init();

        for _ in 0..extra * 2 + 2 {
            controller.toggle();
        }

        prop_assert_eq!(controller.current(), initial);
        prop_assert_eq!(controller.surface().root_theme(), initial.as_str());
        let stored = controller.store().get("theme");
        prop_assert_eq!(stored.as_deref(), Some(initial.as_str()));
    }

    /// Nested clicks never close the sidebar; a wrapper click always does.
    #[test]
    fn prop_only_wrapper_closes(nested in prop::collection::vec(any::<bool>(), 0..10)) {
        let sidebar = SidebarDismissal::new(FakeCheckbox::open(), false);
        for wrapper in nested {
            let target = if wrapper { ClickTarget::Wrapper } else { ClickTarget::Descendant };
            sidebar.handle_wrapper_click(target);
            if wrapper {
                prop_assert!(!sidebar.toggle().is_open());
                sidebar.toggle().open_again();
            } else {
                prop_assert!(sidebar.toggle().is_open());
            }
        }
    }
}
