// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Feed validation for `lantern check`.
//!
//! Problems make the page misbehave (a row with no title, a link to nowhere) and
//! fail the check. Warnings are legal but probably unintended.

use lantern::SearchDocument;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Default)]
pub struct FeedReport {
    pub documents: usize,
    /// Category name → number of posts carrying it
    pub categories: BTreeMap<String, usize>,
    pub problems: Vec<String>,
    pub warnings: Vec<String>,
}

impl FeedReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

pub fn inspect_feed(docs: &[SearchDocument]) -> FeedReport {
    let mut report = FeedReport {
        documents: docs.len(),
        ..FeedReport::default()
    };
    let mut urls = HashSet::new();

    for (i, doc) in docs.iter().enumerate() {
        let name = if doc.title.trim().is_empty() {
            format!("#{}", i)
        } else {
            format!("#{} '{}'", i, doc.title)
        };

        if doc.title.trim().is_empty() {
            report.problems.push(format!("{}: empty title", name));
        }
        if doc.url.trim().is_empty() {
            report.problems.push(format!("{}: empty url", name));
        } else {
            if !doc.url.starts_with('/') {
                report
                    .warnings
                    .push(format!("{}: url '{}' is not site-relative", name, doc.url));
            }
            if !urls.insert(doc.url.as_str()) {
                report
                    .warnings
                    .push(format!("{}: duplicate url '{}'", name, doc.url));
            }
        }
        if doc.date.trim().is_empty() {
            report.warnings.push(format!("{}: empty date", name));
        }

        for category in &doc.categories {
            *report.categories.entry(category.clone()).or_insert(0) += 1;
        }
    }

    if docs.is_empty() {
        report
            .warnings
            .push("feed is empty; every query will show 'no results'".to_string());
    }

    report
}
