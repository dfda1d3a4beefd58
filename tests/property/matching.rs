//! Matcher and ranking properties.

use super::common::{build_index, make_doc};
use lantern::{edit_budget, normalize, substring_distance, SearchDocument};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate random word-like strings.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}").unwrap()
}

/// Generate a post title (a few words).
fn title_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..5).prop_map(|words| words.join(" "))
}

/// Generate a feed of posts.
fn feed_strategy() -> impl Strategy<Value = Vec<SearchDocument>> {
    prop::collection::vec(title_strategy(), 0..12)
        .prop_map(|titles| titles.iter().map(|t| make_doc(t, &[])).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Results are sorted by score, ties by feed position.
    #[test]
    fn prop_results_are_ranked(feed in feed_strategy(), query in word_strategy()) {
        let index = build_index(feed);
        let results = index.search(&query);
        for pair in results.windows(2) {
            prop_assert!(
                pair[0].score < pair[1].score
                    || (pair[0].score == pair[1].score
                        && pair[0].document_index < pair[1].document_index)
            );
        }
    }

    /// Every reported document exists and has a score in [0, 1].
    #[test]
    fn prop_results_are_valid(feed in feed_strategy(), query in word_strategy()) {
        let index = build_index(feed);
        for result in index.search(&query) {
            prop_assert!(result.document_index < index.len());
            prop_assert!((0.0..=1.0).contains(&result.score));
        }
    }

    /// A title containing the query verbatim is always found.
    #[test]
    fn prop_verbatim_title_is_found(feed in feed_strategy(), title in title_strategy()) {
        let mut feed = feed;
        feed.push(make_doc(&title, &[]));
        let index = build_index(feed);
        let target = index.len() - 1;

        prop_assert!(index.search(&title).iter().any(|r| r.document_index == target));
    }

    /// Limiting never reorders: it is a prefix of the full ranking.
    #[test]
    fn prop_limit_is_prefix(feed in feed_strategy(), query in word_strategy(), limit in 0usize..8) {
        let index = build_index(feed);
        let all = index.search(&query);
        let top = index.search_limited(&query, limit);
        prop_assert_eq!(top.len(), all.len().min(limit));
        prop_assert_eq!(&top[..], &all[..top.len()]);
    }

    /// Distance, when reported, never exceeds the budget.
    #[test]
    fn prop_distance_within_budget(
        pattern in word_strategy(),
        text in title_strategy(),
        max in 0usize..4,
    ) {
        if let Some(d) = substring_distance(&pattern, &text, max) {
            prop_assert!(d <= max);
        }
    }

    /// A single substitution is within distance 1.
    #[test]
    fn prop_one_substitution(word in "[a-z]{4,10}", pos in 0usize..4) {
        let mut typo: Vec<char> = word.chars().collect();
        typo[pos] = if typo[pos] == 'x' { 'y' } else { 'x' };
        let typo: String = typo.into_iter().collect();

        prop_assert!(substring_distance(&typo, &word, 1).is_some());
    }

    /// The budget grows with the pattern and stays below it.
    #[test]
    fn prop_budget_monotone(len in 1usize..64) {
        prop_assert!(edit_budget(len, 0.3) <= edit_budget(len + 1, 0.3));
        prop_assert!(edit_budget(len, 0.3) < len);
    }

    /// Normalizing twice changes nothing.
    #[test]
    fn prop_normalize_idempotent(text in "[a-zA-ZÀ-ÖØ-öø-ÿ \\t]{0,40}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }
}
