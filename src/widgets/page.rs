// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Finding the widgets' elements on a page.
//!
//! Every widget is optional. A page without a sidebar, or with only the header
//! search box, mounts whatever it has and skips the rest. Resolution happens
//! once, by id, before any listener is attached; nothing is looked up again
//! when events fire.
//!
//! [`PageNode`] is also what the click handlers classify against: search asks
//! whether a click landed inside a box, the sidebar whether it hit the wrapper.

use crate::config::WidgetConfig;
use std::cell::Cell;

/// An element as far as the widgets care: identity and nesting.
pub trait PageNode {
    /// Same element, not merely equal content.
    fn is_same_as(&self, other: &Self) -> bool;

    /// `other` is this element or nested somewhere inside it.
    fn encloses(&self, other: &Self) -> bool;
}

/// Id lookup over a page.
pub trait PageLookup {
    type Node: PageNode;

    fn element(&self, id: &str) -> Option<Self::Node>;
}

/// The elements each widget found, resolved once at mount.
#[derive(Debug, Clone, PartialEq)]
pub struct PageElements<N> {
    /// (input, results panel) for every configured pair with both present
    pub search_pairs: Vec<(N, N)>,
    pub theme_toggle: Option<N>,
    pub theme_icon: Option<N>,
    pub theme_label: Option<N>,
    /// (checkbox, wrapper), only when both are present
    pub sidebar: Option<(N, N)>,
}

impl<N: PageNode> PageElements<N> {
    pub fn resolve<L>(page: &L, config: &WidgetConfig) -> Self
    where
        L: PageLookup<Node = N>,
    {
        let search_pairs = config
            .search_pairs
            .iter()
            .filter_map(|pair| {
                let found = page.element(&pair.input).zip(page.element(&pair.results));
                if found.is_none() {
                    tracing::debug!(
                        input = %pair.input,
                        results = %pair.results,
                        "search pair not on page"
                    );
                }
                found
            })
            .collect();

        let sidebar = page
            .element(&config.sidebar_checkbox)
            .zip(page.element(&config.sidebar_wrapper));

        Self {
            search_pairs,
            theme_toggle: page.element(&config.theme_toggle),
            theme_icon: page.element(&config.theme_icon),
            theme_label: page.element(&config.theme_label),
            sidebar,
        }
    }

    /// The feed is only worth fetching when some search box can show it.
    pub fn needs_feed(&self) -> bool {
        !self.search_pairs.is_empty()
    }
}

/// One-shot latch for `mount()`.
///
/// A page that calls `mount()` twice would otherwise fetch the feed twice and
/// stack a second set of listeners on every element.
#[derive(Debug, Default)]
pub struct MountGuard {
    mounted: Cell<bool>,
}

impl MountGuard {
    pub const fn new() -> Self {
        Self {
            mounted: Cell::new(false),
        }
    }

    /// `true` exactly once; every later call gets `false`.
    pub fn claim(&self) -> bool {
        !self.mounted.replace(true)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}
