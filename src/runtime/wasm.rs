// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for lantern.
//!
//! This is the browser-facing API. The page loads the module and calls `mount()`
//! once; everything else is event driven. Elements are resolved by id exactly
//! once, and a missing element simply means that widget is not on this page.
//! A second `mount()` on the same page is logged and ignored.
//!
//! ```js
//! import init, { mount } from "./lantern.js";
//! await init();
//! mount({ indexUrl: "/search.json" });
//! ```
//!
//! Pages that want their own UI can skip `mount()` and drive `LanternSearcher`
//! directly:
//!
//! ```js
//! const searcher = new LanternSearcher(await (await fetch("/search.json")).text());
//! searcher.search("compose", 5); // [{ title, excerpt, url, date, categories, score }]
//! ```

use crate::config::WidgetConfig;
use crate::error::{LoadError, StorageError};
use crate::index::{IndexOptions, SearchIndex};
use crate::runtime::console;
use crate::types::IndexState;
use crate::widgets::{
    ClickOrigin, ClickTarget, FeedResponse, IndexLoader, MountGuard, PageElements, PageLookup,
    PageNode, PreferenceStore, ResultRow, ResultsPanel, SearchBinding, SearchField,
    SidebarDismissal, SidebarToggle, ThemeController, ThemeSurface,
};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, KeyboardEvent, Node,
    Response, Storage, Window,
};

/// Class toggled on a results panel to make it visible.
const SHOW_CLASS: &str = "show";

const RESULT_ITEM_CLASS: &str = "search-result-item";
const RESULT_TITLE_CLASS: &str = "search-result-title";
const RESULT_EXCERPT_CLASS: &str = "search-result-excerpt";
const RESULT_DATE_CLASS: &str = "search-result-date";
const LOADING_CLASS: &str = "search-loading";
const NO_RESULTS_CLASS: &str = "search-no-results";

type DomBinding = SearchBinding<DomSearchField, DomResultsPanel>;

thread_local! {
    static MOUNTED: MountGuard = const { MountGuard::new() };
}

// =========================================================================
// ENTRY POINT
// =========================================================================

/// Wire every widget present on the page.
///
/// `options` is an optional `WidgetConfig` object (camelCase keys). Fails only
/// when the options are invalid or there is no document; missing widgets are
/// skipped.
#[wasm_bindgen]
pub fn mount(options: Option<JsValue>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config: WidgetConfig = match options {
        Some(opts) if !opts.is_undefined() && !opts.is_null() => {
            from_value(opts).map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
        }
        _ => WidgetConfig::default(),
    };

    console::init(&config.log_level);
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    if !MOUNTED.with(MountGuard::claim) {
        tracing::warn!("mount() called again, keeping the first set of widgets");
        return Ok(());
    }

    let elements = PageElements::resolve(&document, &config);
    let needs_feed = elements.needs_feed();
    mount_theme(&window, &document, &elements, &config)?;
    mount_sidebar(&document, elements.sidebar, &config)?;
    if needs_feed {
        mount_search(window, &document, elements.search_pairs, &config)?;
    } else {
        tracing::debug!("no search inputs on this page, feed not fetched");
    }

    Ok(())
}

impl PageLookup for Document {
    type Node = Element;

    fn element(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }
}

impl PageNode for Element {
    fn is_same_as(&self, other: &Self) -> bool {
        let other: &Node = other;
        self.is_same_node(Some(other))
    }

    fn encloses(&self, other: &Self) -> bool {
        let other: &Node = other;
        self.contains(Some(other))
    }
}

// =========================================================================
// SEARCH
// =========================================================================

fn mount_search(
    window: Window,
    document: &Document,
    pairs: Vec<(Element, Element)>,
    config: &WidgetConfig,
) -> Result<(), JsValue> {
    let bindings: Vec<Rc<DomBinding>> = pairs
        .into_iter()
        .filter_map(|(input, results)| search_elements(document, input, results))
        .map(|(field, panel)| {
            Rc::new(SearchBinding::new(
                field,
                panel,
                config.search_limits(),
                config.messages.clone(),
            ))
        })
        .collect();

    if bindings.is_empty() {
        tracing::warn!("search elements found but none is an input");
        return Ok(());
    }

    let state = Rc::new(RefCell::new(IndexState::Loading));
    for binding in &bindings {
        wire_search(document, Rc::clone(binding), Rc::clone(&state))?;
    }
    tracing::debug!(inputs = bindings.len(), "search bound");

    let loader = IndexLoader::new(config.index_options());
    let url = config.index_url.clone();
    spawn_local(async move {
        let result = match fetch_feed(&window, &url).await {
            Ok(response) => loader.parse(&response),
            Err(err) => Err(err),
        };
        let settled = IndexLoader::settle(result, bindings.iter().map(Rc::as_ref));
        *state.borrow_mut() = settled;
    });

    Ok(())
}

fn search_elements(
    document: &Document,
    input: Element,
    results: Element,
) -> Option<(DomSearchField, DomResultsPanel)> {
    let Ok(input) = input.dyn_into::<HtmlInputElement>() else {
        tracing::debug!("search input is not an <input>, skipping pair");
        return None;
    };
    let Ok(container) = results.dyn_into::<HtmlElement>() else {
        tracing::debug!("search results is not an HTML element, skipping pair");
        return None;
    };
    Some((
        DomSearchField { input },
        DomResultsPanel {
            document: document.clone(),
            container,
        },
    ))
}

fn wire_search(
    document: &Document,
    binding: Rc<DomBinding>,
    state: Rc<RefCell<IndexState>>,
) -> Result<(), JsValue> {
    let input: &EventTarget = binding.field().input.as_ref();

    {
        let binding = Rc::clone(&binding);
        listen(input, "input", move |_event| {
            binding.handle_input(&state.borrow());
        })?;
    }

    {
        let binding = Rc::clone(&binding);
        listen(input, "keydown", move |event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                binding.handle_keydown(&key);
            }
        })?;
    }

    let document_target: &EventTarget = document.as_ref();
    let click_binding = Rc::clone(&binding);
    listen(document_target, "click", move |event| {
        let regions: [&Element; 2] = [
            &click_binding.field().input,
            &click_binding.panel().container,
        ];
        let origin = ClickOrigin::classify(event_element(&event).as_ref(), &regions);
        click_binding.handle_document_click(origin);
    })
}

async fn fetch_feed(window: &Window, url: &str) -> Result<FeedResponse, LoadError> {
    let started = js_sys::Date::now();
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::Network(format!("{:?}", e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| LoadError::Network("fetch did not return a Response".to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .map_err(|e| LoadError::Network(format!("Failed to read body: {:?}", e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| LoadError::Network(format!("Failed to read body: {:?}", e)))?
        .as_string()
        .unwrap_or_default();

    tracing::debug!(
        url,
        status,
        bytes = body.len(),
        elapsed_ms = js_sys::Date::now() - started,
        "feed fetched"
    );
    Ok(FeedResponse { status, body })
}

struct DomSearchField {
    input: HtmlInputElement,
}

impl SearchField for DomSearchField {
    fn value(&self) -> String {
        self.input.value()
    }

    fn set_disabled(&self, disabled: bool) {
        self.input.set_disabled(disabled);
    }

    fn set_placeholder(&self, text: &str) {
        self.input.set_placeholder(text);
    }

    fn blur(&self) {
        if let Err(e) = self.input.blur() {
            tracing::debug!(error = ?e, "blur failed");
        }
    }
}

struct DomResultsPanel {
    document: Document,
    container: HtmlElement,
}

impl ResultsPanel for DomResultsPanel {
    fn render(&self, rows: &[ResultRow]) {
        self.clear();
        for row in rows {
            let appended = build_row(&self.document, row)
                .and_then(|element| self.container.append_child(&element));
            if let Err(e) = appended {
                tracing::warn!(error = ?e, "failed to render result row");
            }
        }
    }

    fn clear(&self) {
        self.container.set_inner_html("");
    }

    fn show(&self) {
        if let Err(e) = self.container.class_list().add_1(SHOW_CLASS) {
            tracing::debug!(error = ?e, "failed to show results");
        }
    }

    fn hide(&self) {
        if let Err(e) = self.container.class_list().remove_1(SHOW_CLASS) {
            tracing::debug!(error = ?e, "failed to hide results");
        }
    }
}

/// Build one dropdown row. Text goes through `textContent`, never HTML.
fn build_row(document: &Document, row: &ResultRow) -> Result<Element, JsValue> {
    match row {
        ResultRow::Hit(hit) => {
            let link = document.create_element("a")?;
            link.set_class_name(RESULT_ITEM_CLASS);
            link.set_attribute("href", &hit.url)?;
            for (class, text) in [
                (RESULT_TITLE_CLASS, &hit.title),
                (RESULT_EXCERPT_CLASS, &hit.excerpt),
                (RESULT_DATE_CLASS, &hit.date),
            ] {
                link.append_child(&text_div(document, class, text)?)?;
            }
            Ok(link)
        }
        ResultRow::Loading(message) => text_div(document, LOADING_CLASS, message),
        ResultRow::NoResults(message) => text_div(document, NO_RESULTS_CLASS, message),
    }
}

fn text_div(document: &Document, class: &str, text: &str) -> Result<Element, JsValue> {
    let div = document.create_element("div")?;
    div.set_class_name(class);
    div.set_text_content(Some(text));
    Ok(div)
}

// =========================================================================
// THEME
// =========================================================================

fn mount_theme(
    window: &Window,
    document: &Document,
    elements: &PageElements<Element>,
    config: &WidgetConfig,
) -> Result<(), JsValue> {
    let surface = DomThemeSurface {
        root: document.document_element(),
        icon: elements.theme_icon.clone(),
        label: elements.theme_label.clone(),
        attribute: config.theme_attribute.clone(),
    };
    let controller = Rc::new(ThemeController::new(
        LocalStorageStore::new(window),
        surface,
        config.theme_storage_key.clone(),
        config.default_theme,
    ));

    let theme = controller.init();
    tracing::debug!(%theme, "theme applied");

    let Some(button) = &elements.theme_toggle else {
        tracing::debug!("no theme toggle on this page");
        return Ok(());
    };
    listen(button.as_ref(), "click", move |_event| {
        controller.toggle();
    })
}

struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    fn new(window: &Window) -> Self {
        // Throws in sandboxed iframes and some privacy modes
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            tracing::debug!("localStorage unavailable, theme will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

struct DomThemeSurface {
    root: Option<Element>,
    icon: Option<Element>,
    label: Option<Element>,
    attribute: String,
}

impl ThemeSurface for DomThemeSurface {
    fn set_root_theme(&self, theme: &str) {
        if let Some(root) = &self.root {
            if let Err(e) = root.set_attribute(&self.attribute, theme) {
                tracing::warn!(error = ?e, "failed to set theme attribute");
            }
        }
    }

    fn set_icon(&self, icon: &str) {
        if let Some(element) = &self.icon {
            element.set_text_content(Some(icon));
        }
    }

    fn set_label(&self, label: &str) {
        if let Some(element) = &self.label {
            element.set_text_content(Some(label));
        }
    }
}

// =========================================================================
// SIDEBAR
// =========================================================================

fn mount_sidebar(
    document: &Document,
    sidebar: Option<(Element, Element)>,
    config: &WidgetConfig,
) -> Result<(), JsValue> {
    let Some((checkbox, wrapper)) = sidebar else {
        tracing::debug!("no sidebar on this page");
        return Ok(());
    };
    let Ok(checkbox) = checkbox.dyn_into::<HtmlInputElement>() else {
        tracing::debug!("sidebar checkbox is not an <input>, skipping sidebar");
        return Ok(());
    };

    let dismissal = Rc::new(SidebarDismissal::new(
        DomSidebarToggle { checkbox },
        config.close_sidebar_on_escape,
    ));

    {
        let dismissal = Rc::clone(&dismissal);
        let target: EventTarget = wrapper.clone().into();
        listen(&target, "click", move |event| {
            let hit = ClickTarget::classify(event_element(&event).as_ref(), &wrapper);
            dismissal.handle_wrapper_click(hit);
        })?;
    }

    if config.close_sidebar_on_escape {
        let document_target: &EventTarget = document.as_ref();
        listen(document_target, "keydown", move |event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                dismissal.handle_keydown(&key);
            }
        })?;
    }

    Ok(())
}

struct DomSidebarToggle {
    checkbox: HtmlInputElement,
}

impl SidebarToggle for DomSidebarToggle {
    fn is_open(&self) -> bool {
        self.checkbox.checked()
    }

    fn close(&self) {
        self.checkbox.set_checked(false);
    }
}

// =========================================================================
// EVENT PLUMBING
// =========================================================================

/// Attach a listener for the lifetime of the page.
fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page; navigation tears everything down
    closure.forget();
    Ok(())
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

// =========================================================================
// STANDALONE SEARCHER
// =========================================================================

/// Search result for JavaScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSearchResult<'a> {
    title: &'a str,
    excerpt: &'a str,
    url: &'a str,
    date: &'a str,
    categories: &'a [String],
    score: f64,
}

/// WASM searcher - thin wrapper around SearchIndex.
#[wasm_bindgen]
pub struct LanternSearcher {
    index: Rc<SearchIndex>,
}

#[wasm_bindgen]
impl LanternSearcher {
    /// Build a searcher from the feed JSON.
    ///
    /// `options`: `{ threshold?, keys?, location?, distance?, ignoreLocation? }`
    #[wasm_bindgen(constructor)]
    pub fn new(feed_json: &str, options: Option<JsValue>) -> Result<LanternSearcher, JsValue> {
        let options: IndexOptions = match options {
            Some(opts) if !opts.is_undefined() && !opts.is_null() => from_value(opts)
                .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?,
            _ => IndexOptions::default(),
        };
        let index = SearchIndex::from_json(feed_json, options)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(LanternSearcher {
            index: Rc::new(index),
        })
    }

    /// Number of documents.
    #[wasm_bindgen(js_name = "docCount")]
    pub fn doc_count(&self) -> usize {
        self.index.len()
    }

    /// Ranked matches, best first (default limit: 5).
    #[wasm_bindgen]
    pub fn search(&self, query: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
        let limit = limit.unwrap_or(crate::config::DEFAULT_MAX_RESULTS);
        let results: Vec<JsSearchResult> = self
            .index
            .search_limited(query, limit)
            .iter()
            .filter_map(|r| {
                let doc = self.index.document(r.document_index)?;
                Some(JsSearchResult {
                    title: &doc.title,
                    excerpt: &doc.excerpt,
                    url: &doc.url,
                    date: &doc.date,
                    categories: &doc.categories,
                    score: r.score,
                })
            })
            .collect();

        to_value(&results).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
