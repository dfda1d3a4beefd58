//! Feed response → index state, including the disabled fallback.

use super::common::{binding, blog_feed, feed_json};
use lantern::widgets::{FeedResponse, IndexLoader};
use lantern::{IndexState, LoadError, Messages};

#[test]
fn good_feed_becomes_ready() {
    let loader = IndexLoader::default();
    let binding = binding();

    let result = loader.parse(&FeedResponse::ok(feed_json(&blog_feed())));
    let state = IndexLoader::settle(result, [&binding]);

    assert_eq!(state.index().map(|i| i.len()), Some(blog_feed().len()));
    assert!(!binding.field().is_disabled());
}

#[test]
fn not_found_is_an_http_error() {
    let response = FeedResponse {
        status: 404,
        body: "<html>Not Found</html>".to_string(),
    };
    let err = IndexLoader::default().parse(&response).unwrap_err();
    assert!(matches!(err, LoadError::Http { status: 404 }));
}

#[test]
fn truncated_body_is_malformed() {
    let body = feed_json(&blog_feed());
    let half: String = body.chars().take(body.chars().count() / 2).collect();
    let response = FeedResponse::ok(half);
    let err = IndexLoader::default().parse(&response).unwrap_err();
    assert!(matches!(err, LoadError::MalformedFeed(_)));
}

#[test]
fn failure_disables_every_input() {
    let header = binding();
    let sidebar = binding();

    let state = IndexLoader::settle(
        Err(LoadError::Network("offline".to_string())),
        [&header, &sidebar],
    );

    assert!(matches!(state, IndexState::Unavailable));
    let unavailable = Messages::default().unavailable;
    for binding in [&header, &sidebar] {
        assert!(binding.field().is_disabled());
        assert_eq!(binding.field().placeholder(), unavailable);
        assert!(!binding.panel().is_shown());
    }
}

#[test]
fn failure_clears_a_pending_loading_row() {
    let binding = binding();
    super::common::type_query(&binding, &IndexState::Loading, "compose");
    assert!(binding.panel().is_shown());

    IndexLoader::settle(Err(LoadError::Http { status: 500 }), [&binding]);

    assert!(binding.panel().rows().is_empty());
    assert!(!binding.panel().is_shown());
}
