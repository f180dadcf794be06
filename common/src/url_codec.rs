//! Conversion between query parameters and typed filter state.

use crate::filter_config::UrlFilterConfig;
use crate::filter_defaults::{FilterDefaults, FilterState, UpdatePayload};
use crate::filter_value::FilterValue;
use crate::query_params::QueryParams;

/// Decode every declared filter from `query`. Absent or unparsable values
/// keep their default.
pub fn filters_from_query(query: &QueryParams, defaults: &FilterDefaults) -> FilterState {
    let mut state = defaults.default_state();
    for field in defaults.fields() {
        let Some(raw) = query.get(&field.key) else { continue };
        if let Some(value) = FilterValue::parse_as(field.kind, raw) {
            state.set_decoded(&field.key, value);
        }
    }
    state
}

/// Apply `payload` on top of `base` (or on an empty query when
/// `preserve_others` is false) and return the next query parameters.
pub fn encode_update(
    base: &QueryParams,
    payload: &UpdatePayload,
    config: &UrlFilterConfig,
    preserve_others: bool,
) -> QueryParams {
    let mut next = if preserve_others { base.clone() } else { QueryParams::new() };
    for (key, value) in payload.iter() {
        let Some(encoded) = value.to_query_value() else {
            next.delete(key);
            continue;
        };
        if config.clean_defaults && config.defaults.default_of(key) == Some(value) {
            next.delete(key);
            continue;
        }
        next.set(key, encoded);
    }
    next
}

/// Query parameters that reproduce `state`, leaving out defaults when
/// `clean_defaults` is on.
pub fn encode_state(state: &FilterState, config: &UrlFilterConfig) -> QueryParams {
    let payload: UpdatePayload = state.iter().map(|(k, v)| (k, v.clone())).collect();
    encode_update(&QueryParams::new(), &payload, config, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_defaults::FilterField;
    use crate::filter_value::FilterKind;

    fn config() -> UrlFilterConfig {
        UrlFilterConfig::new(
            FilterDefaults::new(vec![
                FilterField::text("search", ""),
                FilterField::number("page", 1),
                FilterField::number("size", 10),
                FilterField::flag("active", false),
                FilterField::optional("status", FilterKind::Text),
            ])
            .expect("valid defaults"),
        )
    }

    #[test]
    fn absent_keys_take_defaults() {
        let state = filters_from_query(&QueryParams::parse(""), &config().defaults);
        assert_eq!(state, config().defaults.default_state());
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let state = filters_from_query(&QueryParams::parse("?size=abc&page=3"), &config().defaults);
        assert_eq!(state.number("size"), Some(10));
        assert_eq!(state.number("page"), Some(3));
    }

    #[test]
    fn flags_and_text_decode_by_kind() {
        let defaults = config().defaults;
        let on = filters_from_query(&QueryParams::parse("?active=true&status=draft"), &defaults);
        assert_eq!(on.flag("active"), Some(true));
        assert_eq!(on.text("status"), Some("draft"));
        let off = filters_from_query(&QueryParams::parse("?active=yes"), &defaults);
        assert_eq!(off.flag("active"), Some(false));
        assert_eq!(off.get("status"), Some(&FilterValue::Unset));
    }

    #[test]
    fn update_drops_defaults_and_unset_values() {
        let base = QueryParams::parse("?status=draft&other=x");
        let payload = UpdatePayload::new()
            .with("search", "foo")
            .with("page", 1)
            .with("status", FilterValue::Unset);
        let next = encode_update(&base, &payload, &config(), true);
        assert_eq!(next.to_string(), "other=x&search=foo");
    }

    #[test]
    fn update_keeps_defaults_without_clean_defaults() {
        let config = config().with_clean_defaults(false);
        let payload = UpdatePayload::new().with("page", 1);
        let next = encode_update(&QueryParams::parse("?x=1"), &payload, &config, false);
        assert_eq!(next.to_search(), "?page=1");
    }

    #[test]
    fn encoded_state_only_carries_changes() {
        let config = config();
        let mut state = config.defaults.default_state();
        state.merge(&UpdatePayload::new().with("page", 4).with("active", true), &config.defaults);
        assert_eq!(encode_state(&state, &config).to_string(), "page=4&active=true");
    }
}
