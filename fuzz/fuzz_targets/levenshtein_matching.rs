// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for approximate substring matching.
//!
//! Verifies that reported distances respect the budget, that an exact
//! substring always costs zero, that a larger budget never loses a match, and
//! that the per-start distances agree with the best substring.

#![no_main]

use arbitrary::Arbitrary;
use lantern::{start_distances, substring_distance};
use libfuzzer_sys::fuzz_target;

/// Fuzz input for substring distance
#[derive(Debug, Arbitrary)]
struct MatchInput {
    pattern: String,
    text: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let pattern: String = input.pattern.chars().take(50).collect();
    let text: String = input.text.chars().take(200).collect();
    let max = usize::from(input.max % 16);

    let found = substring_distance(&pattern, &text, max);
    if let Some(d) = found {
        assert!(d <= max, "distance {} exceeds budget {}", d, max);
        assert!(substring_distance(&pattern, &text, max + 1).is_some());
    }

    if text.contains(pattern.as_str()) {
        assert_eq!(found, Some(0));
    }

    if !text.is_empty() {
        let starts = start_distances(&pattern, &text, max);
        assert_eq!(starts.len(), text.chars().count());
        assert_eq!(starts.into_iter().flatten().min(), found);
    }
});
