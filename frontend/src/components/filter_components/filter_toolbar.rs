//! Active filter chips, reset button and share-link button.

use common::{FilterValue, UpdateOptions, UpdatePayload};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_editor_icons::MdInsertLink, md_navigation_icons::{MdClose, MdRefresh}}};

use crate::hooks::use_url_filters::use_page_filters;

#[component]
pub fn FilterToolbar() -> Element {
    let filters = use_page_filters();
    let active_filters = filters.active_filters();
    let has_active_filters = !active_filters.is_empty();

    let reset_filters = {
        let filters = filters.clone();
        move |_e| {
            filters.reset_filters();
        }
    };
    let do_copy_link = use_callback(move |_: ()| {
        let url = filters.shareable_url();
        copy_to_clipboard(url);
    });

    rsx! {
        div {
            id: "x-filter-toolbar",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                flex-wrap: wrap;
                gap: 8px;
                min-height: 40px;
            ",
            for (key, value) in active_filters {
                ActiveFilterChip { key: "{key}", filter_key: key.clone(), value: value.clone() }
            }
            div { style: "flex-grow: 1;" }
            button {
                class: "x-icon-button",
                disabled: !has_active_filters,
                title: "Reset filters",
                onclick: reset_filters,
                Icon { icon: MdRefresh, style: "width: 22px; height: 22px;" }
            }
            button {
                class: "x-icon-button",
                title: "Copy link to these results",
                onclick: move |_e| do_copy_link.call(()),
                Icon { icon: MdInsertLink, style: "width: 22px; height: 22px;" }
            }
        }
    }
}

#[component]
fn ActiveFilterChip(filter_key: String, value: FilterValue) -> Element {
    let filters = use_page_filters();
    let remove = move |_e| {
        let payload = UpdatePayload::new().with(filter_key.clone(), FilterValue::Unset);
        filters.update_url(payload, UpdateOptions::push());
    };
    rsx! {
        span {
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                padding: 4px 10px;
                border-radius: 9999px;
                background-color: #E0E7FF;
                color: #312E81;
                font-size: 14px;
            ",
            "{filter_key}: {value}"
            button {
                style: "border: none; background: none; cursor: pointer; padding: 0px;",
                onclick: remove,
                Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
            }
        }
    }
}

fn copy_to_clipboard(url: String) {
    let Some(window) = web_sys::window() else { return };
    let promise = window.navigator().clipboard().write_text(&url);
    let toast_api = dioxus_primitives::toast::consume_toast();
    spawn(async move {
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => {
                tracing::info!("Link copied to clipboard: {:#?}", url);
                toast_api.info(
                    "Link copied to clipboard.".to_string(),
                    dioxus_primitives::toast::ToastOptions::new()
                        .description("Anyone with the link sees these filters.")
                        .duration(std::time::Duration::from_secs(15))
                        .permanent(false),
                );
            }
            Err(e) => tracing::warn!("Failed to copy link: {:#?}", e),
        }
    });
}
