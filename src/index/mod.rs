// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the in-memory structure every keystroke queries.
//!
//! A blog feed is tens to hundreds of posts, so there is no inverted index or
//! automaton here. Building the index means normalizing every searchable value
//! once and caching its field-length norm; querying is a linear scan with a
//! bounded edit-distance check per value. At this scale that is well under a
//! millisecond and needs no warm-up.
//!
//! The index is built once per page and never mutated. Posts do not change
//! within a page session.

use crate::error::{ConfigError, LoadError};
use crate::scoring::{DEFAULT_DISTANCE, DEFAULT_LOCATION, DEFAULT_THRESHOLD};
use crate::types::{QueryResult, SearchDocument, SearchKey};
use crate::utils::{field_norm, normalize};
use serde::Deserialize;

/// How the index matches and scores.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexOptions {
    /// Maximum tolerated error ratio: 0.0 = exact only, 1.0 = anything goes
    pub threshold: f64,
    /// Fields consulted for each document
    pub keys: Vec<SearchKey>,
    /// Char offset where a match is expected to start
    pub location: usize,
    /// Chars away from `location` that cost a full point of score
    pub distance: usize,
    /// Score matches by edits alone, wherever they start
    pub ignore_location: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            keys: SearchKey::ALL.to_vec(),
            location: DEFAULT_LOCATION,
            distance: DEFAULT_DISTANCE,
            ignore_location: false,
        }
    }
}

impl IndexOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::Threshold(self.threshold));
        }
        if self.keys.is_empty() {
            return Err(ConfigError::NoKeys);
        }
        Ok(())
    }
}

/// A normalized, searchable value with its cached norm.
#[derive(Debug, Clone)]
pub(crate) struct IndexedValue {
    pub(crate) text: String,
    pub(crate) norm: f64,
}

/// Fuzzy search over the post feed.
///
/// # Invariant
///
/// `values.len() == documents.len()`; `values[i]` holds every non-empty value of
/// `documents[i]` for the configured keys.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    documents: Vec<SearchDocument>,
    pub(crate) values: Vec<Vec<IndexedValue>>,
    options: IndexOptions,
}

impl SearchIndex {
    /// Build an index over `documents`.
    pub fn new(documents: Vec<SearchDocument>, options: IndexOptions) -> Result<Self, ConfigError> {
        options.validate()?;

        let values = documents
            .iter()
            .map(|doc| index_values(doc, &options.keys))
            .collect();

        Ok(Self {
            documents,
            values,
            options,
        })
    }

    /// Parse a feed body (a JSON array of documents) and index it.
    pub fn from_json(json: &str, options: IndexOptions) -> Result<Self, LoadError> {
        let documents: Vec<SearchDocument> = serde_json::from_str(json)?;
        Ok(Self::new(documents, options)?)
    }

    pub fn documents(&self) -> &[SearchDocument] {
        &self.documents
    }

    pub fn document(&self, index: usize) -> Option<&SearchDocument> {
        self.documents.get(index)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// All matches for `query`, best first.
    pub fn search(&self, query: &str) -> QueryResult {
        crate::search::search(self, query)
    }

    /// At most `limit` matches for `query`, best first.
    pub fn search_limited(&self, query: &str, limit: usize) -> QueryResult {
        let mut results = self.search(query);
        results.truncate(limit);
        results
    }
}

fn index_values(doc: &SearchDocument, keys: &[SearchKey]) -> Vec<IndexedValue> {
    keys.iter()
        .flat_map(|key| key.values(doc))
        .map(normalize)
        .filter(|text| !text.is_empty())
        .map(|text| {
            let norm = field_norm(&text);
            IndexedValue { text, norm }
        })
        .collect()
}
