//! URL-backed list filter state shared by the dashboard pages.

extern crate serde;


pub mod filter_value;
pub mod filter_defaults;
pub mod filter_config;
pub mod filter_presets;
pub mod query_params;
pub mod location;
pub mod url_codec;
pub mod reducer;
pub mod arbiter;
pub mod history;
pub mod url_filters;

pub use filter_config::{FilterConfigError, UrlFilterConfig};
pub use filter_defaults::{FilterDefaults, FilterField, FilterState, UpdatePayload};
pub use filter_value::{FilterKind, FilterValue};
pub use history::{History, MemoryHistory};
pub use reducer::{Navigation, NavigationMode, UpdateOptions};
pub use url_filters::UrlFilters;
