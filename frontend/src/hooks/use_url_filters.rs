use std::rc::Rc;

use common::{UrlFilterConfig, UrlFilters};
use dioxus::prelude::*;

use crate::hooks::browser_history::{BrowserHistory, PopStateListener};
use crate::routes::Route;

pub type PageFilters = UrlFilters<BrowserHistory>;

/// Filter state of the current page, backed by the browser URL. The calling
/// component re-renders whenever the URL changes, whether through these
/// filters, back/forward, or a router `Link`.
pub fn use_url_filters(config: impl FnOnce() -> UrlFilterConfig) -> PageFilters {
    let revision = use_signal(|| 0_u64);
    let history = BrowserHistory::new(revision);
    let _listener = use_hook(move || Rc::new(PopStateListener::attach(history)));
    let filters = use_hook(move || UrlFilters::new(config(), history));
    subscribe_to_url_changes(&filters);
    filters
}

/// Same as [`use_url_filters`], and makes the filters available to child
/// components through [`use_page_filters`].
pub fn use_url_filters_provider(config: impl FnOnce() -> UrlFilterConfig) -> PageFilters {
    let filters = use_url_filters(config);
    let provided = filters.clone();
    use_context_provider(move || provided);
    filters
}

/// Filters provided by the enclosing page.
pub fn use_page_filters() -> PageFilters {
    let filters = use_context::<PageFilters>();
    subscribe_to_url_changes(&filters);
    filters
}

// router navigations push the URL without touching our revision, so listen
// to the router as well
fn subscribe_to_url_changes(filters: &PageFilters) {
    let _route = use_route::<Route>();
    filters.history().revision();
}
