// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lantern command-line interface.
//!
//! Two subcommands for whoever maintains the blog: `check` to validate the
//! search feed the site generator wrote, and `search` to see exactly what the
//! page dropdown would show for a query, using the same matcher.

pub mod display;
pub mod report;

use clap::{Parser, Subcommand};
use lantern::{DEFAULT_MAX_RESULTS, DEFAULT_THRESHOLD};

#[derive(Parser)]
#[command(
    name = "lantern",
    about = "Inspect and query a blog search feed",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a search feed (JSON array of posts)
    Check {
        /// Path to the feed, e.g. _site/search.json
        file: String,
    },

    /// Query a search feed and display ranked matches
    Search {
        /// Path to the feed
        file: String,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = DEFAULT_MAX_RESULTS)]
        limit: usize,

        /// Fuzziness: 0.0 accepts exact matches only, 1.0 accepts anything
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Score matches by typos alone, however deep into a field they start
        #[arg(long)]
        ignore_location: bool,
    },
}
