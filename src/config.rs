// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget configuration passed from the page to `mount()`.
//!
//! Every field has a default matching the blog layout, so a bare `mount()` works.
//! Pages override only what differs:
//!
//! ```js
//! mount({ indexUrl: "/blog/search.json", maxResults: 8 });
//! ```

use crate::error::ConfigError;
use crate::index::IndexOptions;
use crate::scoring::{DEFAULT_DISTANCE, DEFAULT_LOCATION, DEFAULT_THRESHOLD};
use crate::types::{SearchKey, ThemePreference};
use serde::Deserialize;

/// Site-relative path of the search feed.
pub const DEFAULT_INDEX_URL: &str = "/search.json";

/// Rows rendered per dropdown.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Queries shorter than this (after trimming) are not run.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// localStorage key holding the theme.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

/// Everything `mount()` needs to find elements and tune behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    pub index_url: String,
    pub threshold: f64,
    pub keys: Vec<SearchKey>,
    /// Where a match is expected to start, see [`IndexOptions::location`]
    pub location: usize,
    pub distance: usize,
    pub ignore_location: bool,
    pub max_results: usize,
    pub min_query_chars: usize,
    /// Input/results element id pairs; missing pairs are skipped
    pub search_pairs: Vec<SearchPair>,
    pub theme_storage_key: String,
    pub theme_attribute: String,
    pub default_theme: ThemePreference,
    pub theme_toggle: String,
    pub theme_icon: String,
    pub theme_label: String,
    pub sidebar_checkbox: String,
    pub sidebar_wrapper: String,
    /// Search closes on Escape; the sidebar only does when this is set
    pub close_sidebar_on_escape: bool,
    pub messages: Messages,
    /// `tracing` level for the console logger: error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            threshold: DEFAULT_THRESHOLD,
            keys: SearchKey::ALL.to_vec(),
            location: DEFAULT_LOCATION,
            distance: DEFAULT_DISTANCE,
            ignore_location: false,
            max_results: DEFAULT_MAX_RESULTS,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            search_pairs: vec![
                SearchPair::new("search-input", "search-results"),
                SearchPair::new("sidebar-search-input", "sidebar-search-results"),
            ],
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
            theme_attribute: "data-theme".to_string(),
            default_theme: ThemePreference::Dark,
            theme_toggle: "theme-toggle".to_string(),
            theme_icon: "theme-icon".to_string(),
            theme_label: "theme-label".to_string(),
            sidebar_checkbox: "sidebar-checkbox".to_string(),
            sidebar_wrapper: "wrapper".to_string(),
            close_sidebar_on_escape: false,
            messages: Messages::default(),
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Reject settings that would make a widget silently useless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.index_options().validate()?;
        if self.max_results == 0 {
            return Err(ConfigError::Zero {
                field: "maxResults",
            });
        }
        if self.min_query_chars == 0 {
            return Err(ConfigError::Zero {
                field: "minQueryChars",
            });
        }
        Ok(())
    }

    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            threshold: self.threshold,
            keys: self.keys.clone(),
            location: self.location,
            distance: self.distance,
            ignore_location: self.ignore_location,
        }
    }

    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            min_query_chars: self.min_query_chars,
            max_results: self.max_results,
        }
    }
}

/// One search box and the dropdown it fills.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchPair {
    pub input: String,
    pub results: String,
}

impl SearchPair {
    pub fn new(input: &str, results: &str) -> Self {
        Self {
            input: input.to_string(),
            results: results.to_string(),
        }
    }
}

/// User-facing strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Messages {
    pub loading: String,
    pub no_results: String,
    /// Placeholder shown in disabled inputs when the feed failed
    pub unavailable: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            loading: "Search loading...".to_string(),
            no_results: "No results found".to_string(),
            unavailable: "Search unavailable".to_string(),
        }
    }
}

/// Length gate and row cap for one dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub min_query_chars: usize,
    pub max_results: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}
