use common::{UpdatePayload, filter_presets};
use dioxus::prelude::*;

use crate::components::filter_components::filter_select::{FilterChoice, FilterSelect};
use crate::hooks::use_url_filters::use_url_filters_provider;
use crate::pages::list_page::ListPage;

/// Schools list
#[component]
pub fn SchoolsPage() -> Element {
    let filters = use_url_filters_provider(filter_presets::schools);
    // a shared link keeps its own filters, a bare visit lists active schools
    use_effect(move || {
        filters.build_initial_url(&UpdatePayload::new().with("status", "active"));
    });

    rsx! {
        ListPage {
            title: "Schools",
            endpoint: "/api/schools",
            search_placeholder: "Search schools by name or NPSN",
            FilterSelect {
                filter_key: "status",
                label: "Status",
                choices: vec![
                    FilterChoice::new("", "All"),
                    FilterChoice::new("active", "Active"),
                    FilterChoice::new("inactive", "Inactive"),
                ],
            }
        }
    }
}
