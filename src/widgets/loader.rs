// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning the one feed response into the page's index state.
//!
//! The fetch itself is platform code (see `runtime::wasm`). Everything after the
//! bytes arrive lives here: status check, JSON parse, index build, and the
//! fallback that disables every bound input when any of that fails. There is no
//! retry. Search is a convenience, and a broken feed stays broken until the
//! next deploy.

use crate::error::LoadError;
use crate::index::{IndexOptions, SearchIndex};
use crate::types::IndexState;
use crate::widgets::search::{ResultsPanel, SearchBinding, SearchField};

/// Status and body of the feed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedResponse {
    pub status: u16,
    pub body: String,
}

impl FeedResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Builds the index from the feed response.
#[derive(Debug, Clone, Default)]
pub struct IndexLoader {
    options: IndexOptions,
}

impl IndexLoader {
    pub fn new(options: IndexOptions) -> Self {
        Self { options }
    }

    /// Accept a 2xx JSON array; reject everything else.
    pub fn parse(&self, response: &FeedResponse) -> Result<SearchIndex, LoadError> {
        if !response.is_success() {
            return Err(LoadError::Http {
                status: response.status,
            });
        }
        SearchIndex::from_json(&response.body, self.options.clone())
    }

    /// Final state for the page. On failure every binding is disabled.
    pub fn settle<'a, F, P, I>(result: Result<SearchIndex, LoadError>, bindings: I) -> IndexState
    where
        F: SearchField + 'a,
        P: ResultsPanel + 'a,
        I: IntoIterator<Item = &'a SearchBinding<F, P>>,
    {
        match result {
            Ok(index) => {
                tracing::info!(documents = index.len(), "search index ready");
                IndexState::Ready(index)
            }
            Err(err) => {
                tracing::warn!(error = %err, "search unavailable");
                for binding in bindings {
                    binding.mark_unavailable();
                }
                IndexState::Unavailable
            }
        }
    }
}
