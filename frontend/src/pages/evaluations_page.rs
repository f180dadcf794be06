use common::filter_presets;
use dioxus::prelude::*;

use crate::components::filter_components::filter_select::{FilterChoice, FilterSelect};
use crate::hooks::use_url_filters::use_url_filters_provider;
use crate::pages::list_page::ListPage;

/// Teacher evaluations list
#[component]
pub fn EvaluationsPage() -> Element {
    use_url_filters_provider(filter_presets::evaluations);

    rsx! {
        ListPage {
            title: "Teacher Evaluations",
            endpoint: "/api/evaluations",
            search_placeholder: "Search by teacher name",
            FilterSelect {
                filter_key: "status",
                label: "Status",
                choices: vec![
                    FilterChoice::new("", "All"),
                    FilterChoice::new("draft", "Draft"),
                    FilterChoice::new("submitted", "Submitted"),
                    FilterChoice::new("reviewed", "Reviewed"),
                ],
            }
            FilterSelect {
                filter_key: "show_archived",
                label: "Archived",
                choices: vec![
                    FilterChoice::new("false", "Hide archived"),
                    FilterChoice::new("true", "Show archived"),
                ],
            }
        }
    }
}
