//! Shows the request parameters the current filters translate to.

use dioxus::prelude::*;

use crate::hooks::use_url_filters::use_page_filters;

#[component]
pub fn RequestParamsPanel(endpoint: String) -> Element {
    let filters = use_page_filters();
    let params: serde_json::Map<String, serde_json::Value> = filters
        .current_filters()
        .request_params()
        .into_iter()
        .map(|(k, v)| (k, serde_json::Value::String(v)))
        .collect();
    let params_txt = serde_json::to_string_pretty(&params).unwrap_or_default();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                padding: 12px;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                background-color: white;
            ",
            span {
                style: "font-size: 14px; color: #6B7280;",
                "GET {endpoint}"
            }
            pre {
                style: "margin: 0px; font-size: 14px; color: #111827; text-wrap: auto;",
                "{params_txt}"
            }
        }
    }
}
