//! Widget configuration flowing into bindings and the loader.

use super::common::{composed_method, feed_json};
use lantern::testing::{FakeField, FakePanel};
use lantern::widgets::{FeedResponse, IndexLoader, ResultRow, SearchBinding};
use lantern::{ConfigError, WidgetConfig};

fn config(json: &str) -> WidgetConfig {
    serde_json::from_str(json).expect("valid config json")
}

#[test]
fn defaults_describe_the_stock_page() {
    let config = WidgetConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.index_url, "/search.json");
    assert_eq!(config.search_pairs.len(), 2);
    assert_eq!(config.search_limits().max_results, 5);
    assert_eq!(config.search_limits().min_query_chars, 2);
    assert!(!config.close_sidebar_on_escape);
}

#[test]
fn custom_messages_reach_the_panel() {
    let config = config(r#"{"messages":{"noResults":"Nothing matched"}}"#);
    let binding = SearchBinding::new(
        FakeField::default(),
        FakePanel::default(),
        config.search_limits(),
        config.messages.clone(),
    );
    let loader = IndexLoader::new(config.index_options());
    let state = IndexLoader::settle(
        loader.parse(&FeedResponse::ok(feed_json(&[composed_method()]))),
        [&binding],
    );

    binding.field().type_text("zzzzz");
    binding.handle_input(&state);

    assert_eq!(
        binding.panel().rows(),
        vec![ResultRow::NoResults("Nothing matched".to_string())]
    );
}

#[test]
fn min_query_chars_is_configurable() {
    let config = config(r#"{"minQueryChars":4}"#);
    let binding = SearchBinding::new(
        FakeField::default(),
        FakePanel::default(),
        config.search_limits(),
        config.messages.clone(),
    );
    let state = lantern::IndexState::Loading;

    binding.field().type_text("com");
    binding.handle_input(&state);
    assert!(!binding.panel().is_shown());

    binding.field().type_text("comp");
    binding.handle_input(&state);
    assert!(binding.panel().is_shown());
}

#[test]
fn zero_max_results_is_rejected() {
    let config = config(r#"{"maxResults":0}"#);
    assert_eq!(
        config.validate(),
        Err(ConfigError::Zero {
            field: "maxResults"
        })
    );
}
