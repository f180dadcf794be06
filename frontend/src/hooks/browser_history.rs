//! [`History`] over `window.location` and the browser history API.

use std::time::Duration;

use common::history::History;
use common::location::Location;
use common::reducer::{Navigation, NavigationMode};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Browser history. `revision` is bumped on every navigation and on
/// `popstate`, so components that read it re-render when the URL changes.
#[derive(Clone, Copy, PartialEq)]
pub struct BrowserHistory {
    revision: Signal<u64>,
}

impl BrowserHistory {
    pub fn new(revision: Signal<u64>) -> Self {
        Self { revision }
    }

    /// Read the URL revision, subscribing the current scope to URL changes.
    pub fn revision(&self) -> u64 {
        *self.revision.read()
    }

    fn bump(&self) {
        let mut revision = self.revision;
        *revision.write() += 1;
    }
}

impl History for BrowserHistory {
    fn location(&self) -> Location {
        let Some(window) = web_sys::window() else {
            return Location::default();
        };
        let location = window.location();
        let origin = location.origin().unwrap_or_default();
        let path = location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = location.search().unwrap_or_default();
        Location::new(origin, path, &search)
    }

    fn navigate(&self, navigation: &Navigation) {
        let Some(window) = web_sys::window() else {
            tracing::warn!("No window, dropping navigation to {}", navigation.target);
            return;
        };
        let history = match window.history() {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!("History API unavailable: {:#?}", e);
                return;
            }
        };
        let result = match navigation.mode {
            NavigationMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(&navigation.target)),
            NavigationMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(&navigation.target)),
        };
        if let Err(e) = result {
            tracing::warn!("Failed to navigate to {}: {:#?}", navigation.target, e);
            return;
        }
        self.bump();
    }

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        Timeout::new(delay.as_millis() as u32, move || task()).forget();
    }
}

/// `popstate` listener that bumps the revision on back/forward navigation.
/// Detached when dropped.
pub struct PopStateListener {
    closure: Closure<dyn FnMut()>,
}

impl PopStateListener {
    pub fn attach(history: BrowserHistory) -> Self {
        let closure = Closure::<dyn FnMut()>::new(move || history.bump());
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref()) {
                tracing::warn!("Failed to listen for popstate: {:#?}", e);
            }
        }
        Self { closure }
    }
}

impl Drop for PopStateListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback("popstate", self.closure.as_ref().unchecked_ref());
        }
    }
}
