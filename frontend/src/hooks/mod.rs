//! Hooks binding the URL filter state to the browser.

pub mod browser_history;
pub mod use_url_filters;
