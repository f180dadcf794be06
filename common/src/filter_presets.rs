//! Filter defaults for the dashboard list pages.

use crate::filter_config::UrlFilterConfig;
use crate::filter_defaults::{FilterDefaults, FilterField};
use crate::filter_value::FilterKind;

pub const PAGE_SIZE: i64 = 10;

fn list_fields() -> Vec<FilterField> {
    vec![
        FilterField::text("search", ""),
        FilterField::number("page", 1),
        FilterField::number("size", PAGE_SIZE),
    ]
}

pub fn schools() -> UrlFilterConfig {
    let mut fields = list_fields();
    fields.push(FilterField::optional("status", FilterKind::Text));
    fields.push(FilterField::optional("organization_id", FilterKind::Number));
    UrlFilterConfig::new(FilterDefaults::preset(fields))
}

pub fn articles() -> UrlFilterConfig {
    let mut fields = list_fields();
    fields.push(FilterField::text("sort", "created_at"));
    fields.push(FilterField::text("order", "desc"));
    fields.push(FilterField::optional("period_id", FilterKind::Number));
    UrlFilterConfig::new(FilterDefaults::preset(fields))
}

pub fn evaluations() -> UrlFilterConfig {
    let mut fields = list_fields();
    fields.push(FilterField::optional("period_id", FilterKind::Number));
    fields.push(FilterField::optional("organization_id", FilterKind::Number));
    fields.push(FilterField::optional("status", FilterKind::Text));
    fields.push(FilterField::flag("show_archived", false));
    UrlFilterConfig::new(FilterDefaults::preset(fields))
}
