// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use lantern::{IndexOptions, SearchIndex, DEFAULT_MIN_QUERY_CHARS};
use std::fs;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, report, Cli, Commands};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Check { file } => run_check(&file),
        Commands::Search {
            file,
            query,
            limit,
            threshold,
            ignore_location,
        } => run_search(&file, &query, limit, threshold, ignore_location),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log filter from `LANTERN_LOG` (e.g. `debug`, `lantern=trace`), warn by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("LANTERN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_index(path: &str, options: IndexOptions) -> Result<SearchIndex> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let index = SearchIndex::from_json(&raw, options)
        .with_context(|| format!("Failed to load feed {}", path))?;
    tracing::debug!(path, documents = index.len(), "feed loaded");
    Ok(index)
}

fn run_check(path: &str) -> Result<()> {
    let index = load_index(path, IndexOptions::default())?;
    let report = report::inspect_feed(index.documents());
    display::print_feed_report(path, &report);

    if !report.is_ok() {
        bail!("{} problem(s) in {}", report.problems.len(), path);
    }
    Ok(())
}

fn run_search(
    path: &str,
    query: &str,
    limit: usize,
    threshold: f64,
    ignore_location: bool,
) -> Result<()> {
    let options = IndexOptions {
        threshold,
        ignore_location,
        ..IndexOptions::default()
    };
    let index = load_index(path, options)?;

    if lantern::query_len(query) < DEFAULT_MIN_QUERY_CHARS {
        println!(
            "note: the page ignores queries shorter than {} characters",
            DEFAULT_MIN_QUERY_CHARS
        );
    }

    let results = index.search_limited(query, limit);
    display::print_results(query, &index, &results);
    Ok(())
}
