// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by the search index and the page widgets.
//!
//! Posts arrive as [`SearchDocument`]s from the feed produced at site build time.
//! Queries produce a [`QueryResult`]: indices into the document list plus a score,
//! best first. The theme preference and the index lifecycle are small enums so
//! the controllers can match on them instead of juggling nullable globals.
//!
//! # Invariants
//!
//! - **ScoredDocument**: `document_index < index.documents().len()`
//!   Results always point at a document the index owns.
//!
//! - **QueryResult**: scores are non-decreasing (best first). Equal scores keep
//!   feed order, so the same query over the same feed renders the same rows.
//!
//! - **Score range**: `0.0 <= score <= 1.0`, where `0.0` is a perfect hit.

use crate::index::SearchIndex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One published post, as listed in the search feed.
///
/// Immutable once fetched. `date` is already formatted for display and never
/// parsed; `excerpt` is plain text that the site generator truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocument {
    pub title: String,
    pub excerpt: String,
    /// Site-relative path, e.g. `/composed-method`
    pub url: String,
    pub date: String,
    /// Ordered category names. Older feeds omit the field entirely.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// A document that matched a query, with its relevance.
///
/// Lower is better: `0.0` is an exact hit, `1.0` is no match at all. This is the
/// orientation Fuse-style matchers report, and it lets the threshold read as
/// "maximum tolerated error ratio".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub document_index: usize,
    pub score: f64,
}

/// Matches for one query, best first. Rebuilt on every keystroke.
pub type QueryResult = Vec<ScoredDocument>;

/// Which searchable field of a document a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKey {
    Title,
    Excerpt,
    Categories,
}

impl SearchKey {
    /// All keys, in the order they are scored.
    pub const ALL: [SearchKey; 3] = [SearchKey::Title, SearchKey::Excerpt, SearchKey::Categories];

    /// The raw values this key contributes for a document.
    ///
    /// Categories are an array field: every entry is matched on its own.
    pub fn values<'a>(&self, doc: &'a SearchDocument) -> Vec<&'a str> {
        match self {
            SearchKey::Title => vec![doc.title.as_str()],
            SearchKey::Excerpt => vec![doc.excerpt.as_str()],
            SearchKey::Categories => doc.categories.iter().map(String::as_str).collect(),
        }
    }
}

// =============================================================================
// THEME
// =============================================================================

/// Persisted colour scheme. Stored as the literal `"light"` or `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Value written to storage and to the root theme attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Glyph shown in the toggle button.
    pub fn icon(self) -> &'static str {
        match self {
            ThemePreference::Light => "☀️",
            ThemePreference::Dark => "🌙",
        }
    }

    /// Text shown next to the glyph.
    pub fn label(self) -> &'static str {
        match self {
            ThemePreference::Light => "light mode",
            ThemePreference::Dark => "dark mode",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected theme value read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected 'light' or 'dark')")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

// =============================================================================
// INDEX LIFECYCLE
// =============================================================================

/// Where the page-wide search index is in its one-shot lifecycle.
///
/// Starts as `Loading`, moves exactly once to `Ready` or `Unavailable`, and is
/// dropped on navigation. Nothing moves it backwards.
#[derive(Debug, Default)]
pub enum IndexState {
    #[default]
    Loading,
    Ready(SearchIndex),
    Unavailable,
}

impl IndexState {
    pub fn is_ready(&self) -> bool {
        matches!(self, IndexState::Ready(_))
    }

    /// The index, once the feed has been fetched and parsed.
    pub fn index(&self) -> Option<&SearchIndex> {
        match self {
            IndexState::Ready(index) => Some(index),
            _ => None,
        }
    }
}
