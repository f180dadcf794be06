use common::filter_presets;
use dioxus::prelude::*;

use crate::components::filter_components::filter_select::{FilterChoice, FilterSelect};
use crate::hooks::use_url_filters::use_url_filters_provider;
use crate::pages::list_page::ListPage;

#[component]
pub fn ArticlesPage() -> Element {
    use_url_filters_provider(filter_presets::articles);

    rsx! {
        ListPage {
            title: "Articles",
            endpoint: "/api/articles",
            search_placeholder: "Search articles",
            FilterSelect {
                filter_key: "sort",
                label: "Sort by",
                choices: vec![
                    FilterChoice::new("created_at", "Date created"),
                    FilterChoice::new("title", "Title"),
                    FilterChoice::new("views", "Views"),
                ],
            }
            FilterSelect {
                filter_key: "order",
                label: "Order",
                choices: vec![
                    FilterChoice::new("desc", "Newest first"),
                    FilterChoice::new("asc", "Oldest first"),
                ],
            }
        }
    }
}
