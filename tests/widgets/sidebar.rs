//! Sidebar overlay dismissal.

use lantern::testing::FakeCheckbox;
use lantern::widgets::{ClickTarget, SidebarDismissal, SidebarToggle};

#[test]
fn nested_click_keeps_sidebar_open() {
    let sidebar = SidebarDismissal::new(FakeCheckbox::open(), false);

    assert!(!sidebar.handle_wrapper_click(ClickTarget::Descendant));
    assert!(sidebar.toggle().is_open());
}

#[test]
fn background_click_closes() {
    let sidebar = SidebarDismissal::new(FakeCheckbox::open(), false);

    assert!(sidebar.handle_wrapper_click(ClickTarget::Wrapper));
    assert!(!sidebar.toggle().is_open());
}

#[test]
fn closed_sidebar_is_left_alone() {
    let sidebar = SidebarDismissal::new(FakeCheckbox::default(), false);

    assert!(!sidebar.handle_wrapper_click(ClickTarget::Wrapper));
    assert_eq!(sidebar.toggle().close_calls(), 0);
}

#[test]
fn reopen_then_dismiss_again() {
    let sidebar = SidebarDismissal::new(FakeCheckbox::open(), false);
    sidebar.handle_wrapper_click(ClickTarget::Wrapper);

    sidebar.toggle().open_again();
    assert!(sidebar.handle_wrapper_click(ClickTarget::Wrapper));
    assert_eq!(sidebar.toggle().close_calls(), 2);
}

#[test]
fn escape_is_ignored_by_default() {
    let sidebar = SidebarDismissal::new(FakeCheckbox::open(), false);

    assert!(!sidebar.handle_keydown("Escape"));
    assert!(sidebar.toggle().is_open());
}

#[test]
fn escape_closes_when_enabled() {
    let sidebar = SidebarDismissal::new(FakeCheckbox::open(), true);

    assert!(!sidebar.handle_keydown("Enter"));
    assert!(sidebar.handle_keydown("Escape"));
    assert!(!sidebar.toggle().is_open());
}
