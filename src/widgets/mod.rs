// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page widgets, written against small DOM traits.
//!
//! Each controller takes its elements as trait objects resolved once at startup,
//! and its shared dependencies (the index state) as handler arguments. The browser
//! adapter in `runtime::wasm` implements the traits over `web-sys`; tests use the
//! in-memory fakes in `testing`.
//!
//! | Widget | Elements | State |
//! |--------|----------|-------|
//! | search | input + results panel, per pair | shared `IndexState` |
//! | loader | every search binding | produces `IndexState` |
//! | theme | root, toggle icon + label, storage | `ThemePreference` |
//! | sidebar | checkbox + wrapper | the checkbox itself |
//!
//! [`PageElements`] finds all of them by id in one pass; whatever is missing is
//! simply not mounted.

pub mod loader;
pub mod page;
pub mod search;
pub mod sidebar;
pub mod theme;

pub use loader::{FeedResponse, IndexLoader};
pub use page::{MountGuard, PageElements, PageLookup, PageNode};
pub use search::{
    plan_results, ClickOrigin, ResultHit, ResultRow, ResultsPanel, ResultsView, SearchBinding,
    SearchField,
};
pub use sidebar::{ClickTarget, SidebarDismissal, SidebarToggle};
pub use theme::{PreferenceStore, ThemeController, ThemeSurface};
