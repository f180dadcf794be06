//! Drop-down bound to a single text or number filter.

use common::{FilterValue, UpdateOptions, UpdatePayload};
use dioxus::prelude::*;

use crate::hooks::use_url_filters::use_page_filters;

/// Option with an empty `value` clears the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChoice {
    pub value: String,
    pub label: String,
}

impl FilterChoice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

#[component]
pub fn FilterSelect(filter_key: String, label: String, choices: Vec<FilterChoice>) -> Element {
    let filters = use_page_filters();
    let selected = filters
        .current_filters()
        .get(&filter_key)
        .and_then(FilterValue::to_query_value)
        .unwrap_or_default();
    let kind = filters.config().defaults.field(&filter_key).map(|f| f.kind);

    let onchange = move |event: Event<FormData>| {
        let raw = event.value();
        let value = match (raw.is_empty(), kind) {
            (true, _) | (_, None) => FilterValue::Unset,
            (false, Some(kind)) => FilterValue::parse_as(kind, &raw).unwrap_or(FilterValue::Unset),
        };
        let payload = UpdatePayload::new().with(filter_key.clone(), value).with("page", 1);
        filters.update_url(payload, UpdateOptions::push());
    };

    rsx! {
        label {
            style: "display:flex; flex-direction: column; gap: 4px; font-size: 14px; color: #4B5563;",
            "{label}"
            select {
                style: "font-size: 16px; padding: 6px 10px; border-radius: 8px; min-width: 160px;",
                onchange,
                for choice in choices {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: choice.value == selected,
                        "{choice.label}"
                    }
                }
            }
        }
    }
}
