// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search box → dropdown binding.
//!
//! The page may carry several search boxes (sidebar and main column), all sharing
//! one index. Each box gets a [`SearchBinding`]; the binding is the only place the
//! length gate, loading row, empty row and match rows are decided, so every box
//! behaves identically.
//!
//! Deciding what to show ([`plan_results`]) is pure and separate from showing it
//! ([`SearchBinding::apply`]), so the rules can be tested without a DOM.
//!
//! # Per-keystroke flow
//!
//! ```text
//! trimmed.len() < min ──▶ Hidden (clear + hide)
//! index Loading        ──▶ Loading row, shown
//! index Unavailable    ──▶ Hidden (input is disabled anyway)
//! index Ready          ──▶ top N matches, or "no results" row, shown
//! ```

use crate::config::{Messages, SearchLimits};
use crate::types::{IndexState, SearchDocument};
use crate::utils::query_len;
use crate::widgets::page::PageNode;

/// A text input the user types queries into.
pub trait SearchField {
    /// Current raw value (untrimmed).
    fn value(&self) -> String;
    fn set_disabled(&self, disabled: bool);
    fn set_placeholder(&self, text: &str);
    /// Drop keyboard focus.
    fn blur(&self);
}

/// The dropdown under a search input.
pub trait ResultsPanel {
    /// Replace the content with `rows`. Never diffed.
    fn render(&self, rows: &[ResultRow]);
    fn clear(&self);
    /// Add the visible ("show") state.
    fn show(&self);
    /// Remove the visible state.
    fn hide(&self);
}

/// One line of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultRow {
    Hit(ResultHit),
    Loading(String),
    NoResults(String),
}

/// What a matched post shows: title, excerpt and date, linking to `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultHit {
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub url: String,
}

impl From<&SearchDocument> for ResultHit {
    fn from(doc: &SearchDocument) -> Self {
        Self {
            title: doc.title.clone(),
            excerpt: doc.excerpt.clone(),
            date: doc.date.clone(),
            url: doc.url.clone(),
        }
    }
}

/// What the dropdown should look like after a keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Hidden,
    Loading,
    Empty,
    Matches(Vec<ResultHit>),
}

impl ResultsView {
    /// Rows to render, or `None` when the panel should be cleared and hidden.
    pub fn rows(&self, messages: &Messages) -> Option<Vec<ResultRow>> {
        match self {
            ResultsView::Hidden => None,
            ResultsView::Loading => Some(vec![ResultRow::Loading(messages.loading.clone())]),
            ResultsView::Empty => Some(vec![ResultRow::NoResults(messages.no_results.clone())]),
            ResultsView::Matches(hits) => Some(hits.iter().cloned().map(ResultRow::Hit).collect()),
        }
    }
}

/// Decide the dropdown for `query` given where the index is.
pub fn plan_results(query: &str, state: &IndexState, limits: &SearchLimits) -> ResultsView {
    let query = query.trim();
    if query_len(query) < limits.min_query_chars {
        return ResultsView::Hidden;
    }

    match state {
        IndexState::Loading => ResultsView::Loading,
        IndexState::Unavailable => ResultsView::Hidden,
        IndexState::Ready(index) => {
            let hits: Vec<ResultHit> = index
                .search_limited(query, limits.max_results)
                .iter()
                .filter_map(|result| index.document(result.document_index))
                .map(ResultHit::from)
                .collect();

            if hits.is_empty() {
                ResultsView::Empty
            } else {
                ResultsView::Matches(hits)
            }
        }
    }
}

/// Where a document-level click landed relative to a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// On the input, the dropdown, or something inside either
    Inside,
    Outside,
}

impl ClickOrigin {
    /// Inside when `target` sits within any of `regions`. A click with no
    /// element target counts as outside.
    pub fn classify<N: PageNode>(target: Option<&N>, regions: &[&N]) -> Self {
        match target {
            Some(node) if regions.iter().any(|region| region.encloses(node)) => Self::Inside,
            _ => Self::Outside,
        }
    }
}

/// One input + dropdown pair, wired to the shared index.
///
/// The binding owns its elements but not the index: every handler takes the
/// current [`IndexState`] as an argument, so one routine serves every pair.
pub struct SearchBinding<F, P> {
    field: F,
    panel: P,
    limits: SearchLimits,
    messages: Messages,
}

impl<F: SearchField, P: ResultsPanel> SearchBinding<F, P> {
    pub fn new(field: F, panel: P, limits: SearchLimits, messages: Messages) -> Self {
        Self {
            field,
            panel,
            limits,
            messages,
        }
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Input event: read, plan, render. Returns what was shown.
    pub fn handle_input(&self, state: &IndexState) -> ResultsView {
        let view = plan_results(&self.field.value(), state, &self.limits);
        self.apply(&view);
        view
    }

    /// Push a planned view into the panel.
    pub fn apply(&self, view: &ResultsView) {
        match view.rows(&self.messages) {
            Some(rows) => {
                self.panel.render(&rows);
                self.panel.show();
            }
            None => {
                self.panel.clear();
                self.panel.hide();
            }
        }
    }

    /// Document click: hide unless it landed on this input or its dropdown.
    pub fn handle_document_click(&self, origin: ClickOrigin) {
        if origin == ClickOrigin::Outside {
            self.panel.hide();
        }
    }

    /// Keydown on the input. Escape hides the dropdown and drops focus.
    ///
    /// Returns `true` when the key was handled.
    pub fn handle_keydown(&self, key: &str) -> bool {
        if key != "Escape" {
            return false;
        }
        self.panel.hide();
        self.field.blur();
        true
    }

    /// The feed failed: disable the input and say so in its placeholder.
    pub fn mark_unavailable(&self) {
        self.field.set_disabled(true);
        self.field.set_placeholder(&self.messages.unavailable);
        self.panel.clear();
        self.panel.hide();
    }
}
