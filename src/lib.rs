//! Client-side search and page chrome for a static blog.
//!
//! The site generator writes a JSON feed of posts; this crate fetches it once,
//! answers fuzzy queries from the header and sidebar search boxes, and owns the
//! two small page behaviors that ship alongside search: the light/dark theme
//! toggle and dismissing the sidebar by clicking its backdrop.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│  index/      │────▶│  search/    │
//! │ (SearchDoc, │     │ (SearchIndex,│     │  (search,   │
//! │ IndexState) │     │ IndexOptions)│     │   ranking)  │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     widgets/                         │
//! │  (IndexLoader, SearchBinding, ThemeController,      │
//! │   SidebarDismissal - generic over DOM traits)       │
//! └─────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │           runtime/wasm.rs  (feature = "wasm")        │
//! │        web-sys adapters, `mount`, LanternSearcher    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use lantern::{IndexOptions, SearchIndex};
//!
//! let feed = r#"[{"title": "Composed Method", "excerpt": "Small methods.",
//!                "url": "/composed-method", "date": "Mar 3, 2021",
//!                "categories": ["Design Patterns"]}]"#;
//! let index = SearchIndex::from_json(feed, IndexOptions::default()).unwrap();
//!
//! let results = index.search("compose");
//! assert_eq!(results[0].document_index, 0);
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod fuzzy;
mod index;
pub mod runtime;
pub mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;
pub mod widgets;

// Re-exports for public API
pub use config::{
    Messages, SearchLimits, SearchPair, WidgetConfig, DEFAULT_INDEX_URL, DEFAULT_MAX_RESULTS,
    DEFAULT_MIN_QUERY_CHARS, DEFAULT_THEME_STORAGE_KEY,
};
pub use error::{ConfigError, LoadError, StorageError};
pub use fuzzy::{edit_budget, start_distances, substring_distance};
pub use index::{IndexOptions, SearchIndex};
pub use scoring::{DEFAULT_DISTANCE, DEFAULT_LOCATION, DEFAULT_THRESHOLD, NO_MATCH_SCORE};
pub use search::search;
pub use types::{
    IndexState, QueryResult, ScoredDocument, SearchDocument, SearchKey, ThemePreference,
    UnknownTheme,
};
pub use utils::{normalize, query_len};

#[cfg(feature = "wasm")]
pub use runtime::wasm::{mount, LanternSearcher};
