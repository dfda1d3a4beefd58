//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides document builders and in-memory stand-ins for the DOM traits,
//! so widget behavior can be asserted without a browser.

#![doc(hidden)]

use crate::error::StorageError;
use crate::types::SearchDocument;
use crate::widgets::{
    PageLookup, PageNode, PreferenceStore, ResultRow, ResultsPanel, SearchField, SidebarToggle,
    ThemeSurface,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Create a test document with a neutral excerpt.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(title: &str, categories: &[&str]) -> SearchDocument {
    SearchDocument {
        title: title.to_string(),
        excerpt: "An older entry from the archive.".to_string(),
        url: format!("/{}", slug(title)),
        date: "Jan 1, 2020".to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

/// Create a test document with every field spelled out.
pub fn make_full_doc(
    title: &str,
    excerpt: &str,
    url: &str,
    date: &str,
    categories: &[&str],
) -> SearchDocument {
    SearchDocument {
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        url: url.to_string(),
        date: date.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

/// The one-post feed used by the acceptance scenarios.
pub fn composed_method() -> SearchDocument {
    make_full_doc(
        "Composed Method",
        "Breaking down a method...",
        "/composed-method",
        "Feb 28, 2016",
        &["Design Patterns"],
    )
}

fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

// ============================================================================
// DOM FAKES
// ============================================================================

/// In-memory text input.
#[derive(Debug, Default)]
pub struct FakeField {
    value: RefCell<String>,
    disabled: Cell<bool>,
    placeholder: RefCell<String>,
    blurred: Cell<bool>,
}

impl FakeField {
    pub fn with_value(value: &str) -> Self {
        let field = Self::default();
        field.type_text(value);
        field
    }

    /// Replace the value, as if the user typed it.
    pub fn type_text(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    pub fn placeholder(&self) -> String {
        self.placeholder.borrow().clone()
    }

    pub fn was_blurred(&self) -> bool {
        self.blurred.get()
    }
}

impl SearchField for FakeField {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }

    fn set_placeholder(&self, text: &str) {
        *self.placeholder.borrow_mut() = text.to_string();
    }

    fn blur(&self) {
        self.blurred.set(true);
    }
}

/// In-memory results dropdown.
#[derive(Debug, Default)]
pub struct FakePanel {
    rows: RefCell<Vec<ResultRow>>,
    shown: Cell<bool>,
    renders: Cell<usize>,
}

impl FakePanel {
    pub fn rows(&self) -> Vec<ResultRow> {
        self.rows.borrow().clone()
    }

    pub fn is_shown(&self) -> bool {
        self.shown.get()
    }

    /// How many times content was rebuilt.
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }
}

impl ResultsPanel for FakePanel {
    fn render(&self, rows: &[ResultRow]) {
        *self.rows.borrow_mut() = rows.to_vec();
        self.renders.set(self.renders.get() + 1);
    }

    fn clear(&self) {
        self.rows.borrow_mut().clear();
    }

    fn show(&self) {
        self.shown.set(true);
    }

    fn hide(&self) {
        self.shown.set(false);
    }
}

/// In-memory localStorage.
#[derive(Debug, Default)]
pub struct FakeStore {
    entries: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl FakeStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// A store whose writes fail, like Safari private browsing.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for FakeStore {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Records what the theme controller painted.
#[derive(Debug, Default)]
pub struct FakeThemeSurface {
    root: RefCell<String>,
    icon: RefCell<String>,
    label: RefCell<String>,
}

impl FakeThemeSurface {
    pub fn root_theme(&self) -> String {
        self.root.borrow().clone()
    }

    pub fn icon(&self) -> String {
        self.icon.borrow().clone()
    }

    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }
}

impl ThemeSurface for FakeThemeSurface {
    fn set_root_theme(&self, theme: &str) {
        *self.root.borrow_mut() = theme.to_string();
    }

    fn set_icon(&self, icon: &str) {
        *self.icon.borrow_mut() = icon.to_string();
    }

    fn set_label(&self, label: &str) {
        *self.label.borrow_mut() = label.to_string();
    }
}

/// In-memory sidebar checkbox.
#[derive(Debug, Default)]
pub struct FakeCheckbox {
    checked: Cell<bool>,
    close_calls: Cell<usize>,
}

impl FakeCheckbox {
    pub fn open() -> Self {
        let checkbox = Self::default();
        checkbox.checked.set(true);
        checkbox
    }

    /// Tick the box, as the sidebar label click does.
    pub fn open_again(&self) {
        self.checked.set(true);
    }

    pub fn close_calls(&self) -> usize {
        self.close_calls.get()
    }
}

impl SidebarToggle for FakeCheckbox {
    fn is_open(&self) -> bool {
        self.checked.get()
    }

    fn close(&self) {
        self.checked.set(false);
        self.close_calls.set(self.close_calls.get() + 1);
    }
}

/// An element in a fake page tree, identified by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeNode {
    id: String,
    ancestors: Vec<String>,
}

impl FakeNode {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ancestors: Vec::new(),
        }
    }

    /// A node nested directly inside this one.
    pub fn child(&self, id: &str) -> Self {
        let mut ancestors = self.ancestors.clone();
        ancestors.push(self.id.clone());
        Self {
            id: id.to_string(),
            ancestors,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl PageNode for FakeNode {
    fn is_same_as(&self, other: &Self) -> bool {
        self.id == other.id
    }

    fn encloses(&self, other: &Self) -> bool {
        self.is_same_as(other) || other.ancestors.contains(&self.id)
    }
}

/// A page holding a fixed set of elements.
#[derive(Debug, Default)]
pub struct FakePage {
    nodes: HashMap<String, FakeNode>,
}

impl FakePage {
    /// Top-level elements with the given ids.
    pub fn with_ids(ids: &[&str]) -> Self {
        let mut page = Self::default();
        for id in ids {
            page.insert(FakeNode::new(id));
        }
        page
    }

    pub fn insert(&mut self, node: FakeNode) {
        self.nodes.insert(node.id.clone(), node);
    }
}

impl PageLookup for FakePage {
    type Node = FakeNode;

    fn element(&self, id: &str) -> Option<FakeNode> {
        self.nodes.get(id).cloned()
    }
}
