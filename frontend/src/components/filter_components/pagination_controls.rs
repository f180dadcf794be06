//! Previous/next page buttons and page size picker.

use common::{UpdateOptions, UpdatePayload};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::hooks::use_url_filters::use_page_filters;

const PAGE_SIZE_CHOICES: [i64; 4] = [10, 25, 50, 100];

#[component]
pub fn PaginationControls() -> Element {
    let filters = use_page_filters();
    let state = filters.current_filters();
    let page = state.number("page").unwrap_or(1);
    let size = state.number("size").unwrap_or(PAGE_SIZE_CHOICES[0]);
    let can_go_to_previous_page = page > 1;

    let go_to_page = {
        let filters = filters.clone();
        move |page: i64| {
            filters.update_url(UpdatePayload::new().with("page", page), UpdateOptions::push());
        }
    };
    let go_previous = {
        let go_to_page = go_to_page.clone();
        move |_e| {
            if can_go_to_previous_page {
                go_to_page(page - 1);
            }
        }
    };
    let go_next = move |_e| go_to_page(page + 1);
    let change_size = move |event: Event<FormData>| {
        let Ok(size) = event.value().parse::<i64>() else { return };
        filters.update_url(UpdatePayload::new().with("size", size).with("page", 1), UpdateOptions::push());
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
            ",
            button {
                class: "x-icon-button",
                disabled: !can_go_to_previous_page,
                onclick: go_previous,
                Icon { icon: MdArrowBack, style: "width: 24px; height: 24px;" }
            }
            span {
                style: "font-size: 18px; color:rgb(75, 87, 112);",
                "Page {page}"
            }
            button {
                class: "x-icon-button",
                onclick: go_next,
                Icon { icon: MdArrowForward, style: "width: 24px; height: 24px;" }
            }
            select {
                style: "font-size: 16px; padding: 4px 8px; border-radius: 8px;",
                onchange: change_size,
                for choice in PAGE_SIZE_CHOICES {
                    option {
                        value: "{choice}",
                        selected: choice == size,
                        "{choice} / page"
                    }
                }
            }
        }
    }
}
