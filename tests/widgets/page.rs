//! Resolving widget elements on a page, and classifying clicks against them.

use super::common::{binding, blog_feed, ready, type_query};
use lantern::testing::{FakeCheckbox, FakeNode, FakePage};
use lantern::widgets::{ClickOrigin, ClickTarget, PageElements, SidebarDismissal, SidebarToggle};
use lantern::WidgetConfig;

const STOCK_IDS: &[&str] = &[
    "search-input",
    "search-results",
    "sidebar-search-input",
    "sidebar-search-results",
    "theme-toggle",
    "theme-icon",
    "theme-label",
    "sidebar-checkbox",
    "wrapper",
];

#[test]
fn stock_page_resolves_every_widget() {
    let page = FakePage::with_ids(STOCK_IDS);
    let elements = PageElements::resolve(&page, &WidgetConfig::default());

    assert_eq!(elements.search_pairs.len(), 2);
    assert!(elements.theme_toggle.is_some());
    assert!(elements.theme_icon.is_some());
    assert!(elements.theme_label.is_some());
    assert!(elements.sidebar.is_some());
    assert!(elements.needs_feed());
}

#[test]
fn page_without_search_skips_the_feed() {
    let page = FakePage::with_ids(&["theme-toggle", "theme-icon", "theme-label"]);
    let elements = PageElements::resolve(&page, &WidgetConfig::default());

    assert!(elements.search_pairs.is_empty());
    assert!(!elements.needs_feed());
    assert!(elements.theme_toggle.is_some());
    assert!(elements.sidebar.is_none());
}

#[test]
fn missing_theme_parts_resolve_to_none() {
    let page = FakePage::with_ids(&["theme-toggle"]);
    let elements = PageElements::resolve(&page, &WidgetConfig::default());

    assert!(elements.theme_toggle.is_some());
    assert!(elements.theme_icon.is_none());
    assert!(elements.theme_label.is_none());
}

#[test]
fn only_a_direct_wrapper_click_closes_the_sidebar() {
    let mut page = FakePage::with_ids(&["sidebar-checkbox", "wrapper"]);
    let wrapper = FakeNode::new("wrapper");
    let post = wrapper.child("post");
    page.insert(post.clone());

    let elements = PageElements::resolve(&page, &WidgetConfig::default());
    let (_, wrapper) = elements.sidebar.expect("sidebar resolved");
    let sidebar = SidebarDismissal::new(FakeCheckbox::open(), false);

    assert!(!sidebar.handle_wrapper_click(ClickTarget::classify(Some(&post), &wrapper)));
    assert!(sidebar.toggle().is_open());

    assert!(sidebar.handle_wrapper_click(ClickTarget::classify(Some(&wrapper), &wrapper)));
    assert!(!sidebar.toggle().is_open());
}

#[test]
fn clicking_a_result_row_keeps_the_dropdown() {
    let page = FakePage::with_ids(STOCK_IDS);
    let elements = PageElements::resolve(&page, &WidgetConfig::default());
    let (input, panel) = &elements.search_pairs[0];
    let row = panel.child("row-title");
    let other_panel = &elements.search_pairs[1].1;

    let binding = binding();
    type_query(&binding, &ready(blog_feed()), "method");

    binding.handle_document_click(ClickOrigin::classify(Some(&row), &[input, panel]));
    assert!(binding.panel().is_shown());

    // The sidebar's dropdown is outside the header box
    binding.handle_document_click(ClickOrigin::classify(Some(other_panel), &[input, panel]));
    assert!(!binding.panel().is_shown());
}
