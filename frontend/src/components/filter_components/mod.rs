//! Components that read and write the page's URL filters.

pub mod filter_search_bar;
pub mod filter_select;
pub mod filter_toolbar;
pub mod pagination_controls;
pub mod request_params_panel;
