//! Per-page configuration of the URL filter state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::filter_defaults::FilterDefaults;
use crate::filter_value::FilterKind;

pub const DEFAULT_GUARD_WINDOW_MS: u32 = 50;

#[derive(Debug, thiserror::Error)]
pub enum FilterConfigError {
    #[error("filter key `{0}` is declared more than once")]
    DuplicateKey(String),
    #[error("default of filter `{key}` is a {found} but the field is declared as {declared}")]
    DefaultKindMismatch {
        key: String,
        declared: FilterKind,
        found: FilterKind,
    },
    #[error("invalid filter config: {0}")]
    Json(#[from] serde_json::Error),
}

fn default_clean_defaults() -> bool {
    true
}

fn default_guard_window_ms() -> u32 {
    DEFAULT_GUARD_WINDOW_MS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlFilterConfig {
    #[serde(rename = "fields")]
    pub defaults: FilterDefaults,
    /// Leave keys out of the URL while they hold their default value.
    #[serde(default = "default_clean_defaults")]
    pub clean_defaults: bool,
    #[serde(default = "default_guard_window_ms")]
    pub guard_window_ms: u32,
}

impl UrlFilterConfig {
    pub fn new(defaults: FilterDefaults) -> Self {
        Self { defaults, clean_defaults: true, guard_window_ms: DEFAULT_GUARD_WINDOW_MS }
    }

    pub fn with_clean_defaults(mut self, clean_defaults: bool) -> Self {
        self.clean_defaults = clean_defaults;
        self
    }

    pub fn guard_window(&self) -> Duration {
        Duration::from_millis(self.guard_window_ms as u64)
    }

    pub fn from_json(json: &str) -> Result<Self, FilterConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
