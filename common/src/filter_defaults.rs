//! Filter defaults registry, decoded filter state and update payloads.

use serde::{Deserialize, Serialize};

use crate::filter_config::FilterConfigError;
use crate::filter_value::{FilterKind, FilterValue};

/// One declared filter: its query key, its kind and the value it takes when
/// the key is absent from the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterField {
    pub key: String,
    pub kind: FilterKind,
    #[serde(default)]
    pub default: FilterValue,
}

impl FilterField {
    pub fn text(key: impl Into<String>, default: impl Into<String>) -> Self {
        Self { key: key.into(), kind: FilterKind::Text, default: FilterValue::Text(default.into()) }
    }
    pub fn number(key: impl Into<String>, default: i64) -> Self {
        Self { key: key.into(), kind: FilterKind::Number, default: FilterValue::Number(default) }
    }
    pub fn flag(key: impl Into<String>, default: bool) -> Self {
        Self { key: key.into(), kind: FilterKind::Flag, default: FilterValue::Flag(default) }
    }
    /// A filter with no default; it decodes to `Unset` while absent from the URL.
    pub fn optional(key: impl Into<String>, kind: FilterKind) -> Self {
        Self { key: key.into(), kind, default: FilterValue::Unset }
    }

    fn check(&self) -> Result<(), FilterConfigError> {
        match self.default.kind() {
            Some(kind) if kind != self.kind => Err(FilterConfigError::DefaultKindMismatch {
                key: self.key.clone(),
                declared: self.kind,
                found: kind,
            }),
            _ => Ok(()),
        }
    }
}

/// Ordered set of filter fields with unique keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilterDefaults {
    fields: Vec<FilterField>,
}

impl FilterDefaults {
    pub fn new(fields: Vec<FilterField>) -> Result<Self, FilterConfigError> {
        for (i, field) in fields.iter().enumerate() {
            field.check()?;
            if fields[..i].iter().any(|f| f.key == field.key) {
                return Err(FilterConfigError::DuplicateKey(field.key.clone()));
            }
        }
        Ok(Self { fields })
    }

    /// Built-in presets, checked by their unit tests instead of at runtime.
    pub(crate) fn preset(fields: Vec<FilterField>) -> Self {
        debug_assert!(Self::new(fields.clone()).is_ok());
        Self { fields }
    }

    pub fn fields(&self) -> &[FilterField] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FilterField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn default_of(&self, key: &str) -> Option<&FilterValue> {
        self.field(key).map(|f| &f.default)
    }

    /// State where every field holds its default.
    pub fn default_state(&self) -> FilterState {
        FilterState {
            entries: self.fields.iter().map(|f| (f.key.clone(), f.default.clone())).collect(),
        }
    }

    /// Payload that writes every default, in declaration order.
    pub fn as_payload(&self) -> UpdatePayload {
        self.fields.iter().map(|f| (f.key.clone(), f.default.clone())).collect()
    }
}

impl<'de> Deserialize<'de> for FilterDefaults {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Vec::<FilterField>::deserialize(deserializer)?;
        FilterDefaults::new(fields).map_err(serde::de::Error::custom)
    }
}

/// Decoded filters: one value per declared field, in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    entries: Vec<(String, FilterValue)>,
}

impl FilterState {
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FilterValue::as_text)
    }

    pub fn number(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(FilterValue::as_number)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(FilterValue::as_flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Overwrite existing keys with the payload's values, coerced to each
    /// field's kind the way the URL would decode them. `Unset` and values
    /// that do not parse fall back to the field default. Keys that are not
    /// part of `defaults` are ignored.
    pub fn merge(&mut self, payload: &UpdatePayload, defaults: &FilterDefaults) {
        for (key, value) in payload.iter() {
            let Some(field) = defaults.field(key) else { continue };
            let coerced = match value.kind() {
                Some(kind) if kind == field.kind => value.clone(),
                _ => value
                    .to_query_value()
                    .and_then(|raw| FilterValue::parse_as(field.kind, &raw))
                    .unwrap_or_else(|| field.default.clone()),
            };
            self.set_decoded(key, coerced);
        }
    }

    pub(crate) fn set_decoded(&mut self, key: &str, value: FilterValue) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        }
    }

    /// String pairs for every set value, in declaration order. This is the
    /// shape list pages pass on as request parameters.
    pub fn request_params(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.to_query_value().map(|s| (k.clone(), s)))
            .collect()
    }
}

/// Requested change to the filters. Order is kept: new keys are appended to
/// the URL in this order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UpdatePayload {
    entries: Vec<(String, FilterValue)>,
}

impl UpdatePayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`UpdatePayload::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set `key`, replacing an earlier value for the same key in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for UpdatePayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = UpdatePayload::new();
        for (k, v) in iter {
            payload.set(k, v);
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_keys_are_rejected() {
        let err = FilterDefaults::new(vec![FilterField::number("page", 1), FilterField::text("page", "")])
            .expect_err("duplicate key");
        assert!(matches!(err, FilterConfigError::DuplicateKey(k) if k == "page"));
    }

    #[test]
    fn default_must_match_declared_kind() {
        let field = FilterField { key: "size".into(), kind: FilterKind::Number, default: "10".into() };
        let err = FilterDefaults::new(vec![field]).expect_err("kind mismatch");
        assert!(matches!(
            err,
            FilterConfigError::DefaultKindMismatch { declared: FilterKind::Number, found: FilterKind::Text, .. }
        ));
    }

    #[test]
    fn optional_fields_start_unset() {
        let defaults = FilterDefaults::new(vec![
            FilterField::number("page", 1),
            FilterField::optional("period_id", FilterKind::Number),
        ])
        .expect("valid defaults");
        let state = defaults.default_state();
        assert_eq!(state.number("page"), Some(1));
        assert_eq!(state.get("period_id"), Some(&FilterValue::Unset));
        assert_eq!(state.request_params(), vec![("page".to_string(), "1".to_string())]);
    }

    #[test]
    fn payload_set_keeps_first_position() {
        let payload = UpdatePayload::new().with("search", "a").with("page", 2).with("search", "b");
        let keys: Vec<_> = payload.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["search", "page"]);
        assert_eq!(payload.get("search"), Some(&FilterValue::from("b")));
    }

    #[test]
    fn merge_ignores_unknown_keys() {
        let defaults = FilterDefaults::new(vec![FilterField::text("status", "")]).expect("valid defaults");
        let mut state = defaults.default_state();
        state.merge(&UpdatePayload::new().with("status", "active").with("other", 3), &defaults);
        assert_eq!(state.text("status"), Some("active"));
        assert_eq!(state.get("other"), None);
    }

    #[test]
    fn merge_coerces_to_declared_kind() {
        let defaults = FilterDefaults::new(vec![
            FilterField::number("page", 1),
            FilterField::number("size", 10),
            FilterField::flag("active", false),
            FilterField::text("search", ""),
            FilterField::optional("period_id", FilterKind::Number),
        ])
        .expect("valid defaults");
        let mut state = defaults.default_state();
        state.merge(
            &UpdatePayload::new()
                .with("page", "2")
                .with("size", "abc")
                .with("active", "yes")
                .with("search", 7)
                .with("period_id", FilterValue::Unset),
            &defaults,
        );
        assert_eq!(state.number("page"), Some(2));
        assert_eq!(state.number("size"), Some(10));
        assert_eq!(state.flag("active"), Some(false));
        assert_eq!(state.text("search"), Some("7"));
        assert_eq!(state.get("period_id"), Some(&FilterValue::Unset));

        state.merge(&UpdatePayload::new().with("size", FilterValue::Unset), &defaults);
        assert_eq!(state.number("size"), Some(10));
    }
}
