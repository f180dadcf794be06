//! Search box bound to the `search` filter.

use common::{UpdateOptions, UpdatePayload};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::hooks::use_url_filters::use_page_filters;

#[component]
pub fn FilterSearchBar(placeholder: String) -> Element {
    let filters = use_page_filters();
    let url_search = filters.current_filters().text("search").unwrap_or_default().to_string();
    let mut typed_search = use_signal(|| url_search.clone());
    // navigation does not reset local signals, follow the URL when it changes
    let history = *filters.history();
    let effect_filters = filters.clone();
    use_effect(move || {
        history.revision();
        let current = effect_filters.current_filters().text("search").unwrap_or_default().to_string();
        typed_search.set(current);
    });
    let search_has_changed = typed_search.read().clone() != url_search;
    let search_button_color = if search_has_changed { "blue" } else { "#6B7280" };

    let trigger_search = move |_: ()| {
        let payload = UpdatePayload::new()
            .with("search", typed_search.read().trim().to_string())
            .with("page", 1);
        filters.update_url(payload, UpdateOptions::push());
    };
    let search_onkeydown = {
        let trigger_search = trigger_search.clone();
        move |event: Event<KeyboardData>| {
            if event.key() == Key::Enter {
                trigger_search(());
            }
        }
    };

    rsx! {
        div {
            id: "x-filter-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 420px;
            ",
            button {
                style: "border: none; background: none; cursor: pointer;",
                onclick: move |_| trigger_search(()),
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color};" }
            }
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 18px;
                    font-family: Roboto, sans-serif;
                ",
                value: "{typed_search}",
                oninput: move |event: Event<FormData>| typed_search.set(event.value()),
                onkeydown: search_onkeydown,
            }
        }
    }
}
