//! Layout shared by the dashboard list pages.

use dioxus::prelude::*;

use crate::components::filter_components::{
    filter_search_bar::FilterSearchBar,
    filter_toolbar::FilterToolbar,
    pagination_controls::PaginationControls,
    request_params_panel::RequestParamsPanel,
};

/// Expects the page filters to be provided by the caller.
#[component]
pub fn ListPage(title: String, endpoint: String, search_placeholder: String, children: Element) -> Element {
    rsx! {
        Title { "Yayasan - {title}" }
        div {
            id: "x-list-page-root",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                height: 100%;
                width: 100%;
                padding: 24px 32px;
                box-sizing: border-box;
                background: #F5F6F8;
                overflow: auto;
            ",
            h1 {
                style: "font-size: 28px; font-weight: 500; color: #0F172A; margin: 0px;",
                "{title}"
            }
            div {
                id: "x-list-page-filters",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: flex-end;
                    flex-wrap: wrap;
                    gap: 16px;
                ",
                FilterSearchBar { placeholder: search_placeholder }
                {children}
            }
            FilterToolbar {}
            RequestParamsPanel { endpoint }
            PaginationControls {}
        }
    }
}
