//! Pure reducer from the current location and a filter action to the next
//! navigation.

use serde::{Deserialize, Serialize};

use crate::filter_config::UrlFilterConfig;
use crate::filter_defaults::UpdatePayload;
use crate::location::Location;
use crate::query_params::QueryParams;
use crate::url_codec::encode_update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
    /// Merge into the existing query string instead of starting from an empty one.
    pub preserve_others: bool,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self { replace: true, preserve_others: true }
    }
}

impl UpdateOptions {
    pub fn push() -> Self {
        Self { replace: false, ..Self::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterAction {
    Update { payload: UpdatePayload, options: UpdateOptions },
    Reset,
    /// Initial filters written on first mount.
    Seed { initial: UpdatePayload },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationMode {
    Push,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Navigation {
    /// Path plus `?query`, without the query part when it is empty.
    pub target: String,
    pub mode: NavigationMode,
}

impl Navigation {
    fn to(path: &str, query: &QueryParams, mode: NavigationMode) -> Self {
        Self { target: format!("{}{}", path, query.to_search()), mode }
    }
}

pub fn reduce(config: &UrlFilterConfig, location: &Location, action: &FilterAction) -> Navigation {
    match action {
        FilterAction::Update { payload, options } => {
            let next = encode_update(&location.query, payload, config, options.preserve_others);
            let mode = if options.replace { NavigationMode::Replace } else { NavigationMode::Push };
            Navigation::to(&location.path, &next, mode)
        }
        FilterAction::Reset => {
            let next = if config.clean_defaults {
                QueryParams::new()
            } else {
                encode_update(&location.query, &config.defaults.as_payload(), config, false)
            };
            Navigation::to(&location.path, &next, NavigationMode::Replace)
        }
        FilterAction::Seed { initial } => {
            let next = encode_update(&location.query, initial, config, true);
            Navigation::to(&location.path, &next, NavigationMode::Replace)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_defaults::{FilterDefaults, FilterField};

    fn config() -> UrlFilterConfig {
        UrlFilterConfig::new(
            FilterDefaults::new(vec![
                FilterField::text("search", ""),
                FilterField::number("page", 1),
                FilterField::number("size", 10),
            ])
            .expect("valid defaults"),
        )
    }

    #[test]
    fn update_merges_into_current_query() {
        let loc = Location::from_relative("", "/schools?size=25");
        let action = FilterAction::Update {
            payload: UpdatePayload::new().with("page", 3),
            options: UpdateOptions::push(),
        };
        let nav = reduce(&config(), &loc, &action);
        assert_eq!(nav, Navigation { target: "/schools?size=25&page=3".into(), mode: NavigationMode::Push });
    }

    #[test]
    fn update_without_preserve_starts_empty() {
        let loc = Location::from_relative("", "/schools?size=25&tab=x");
        let action = FilterAction::Update {
            payload: UpdatePayload::new().with("search", "smk"),
            options: UpdateOptions { replace: true, preserve_others: false },
        };
        assert_eq!(reduce(&config(), &loc, &action).target, "/schools?search=smk");
    }

    #[test]
    fn reset_with_clean_defaults_strips_query() {
        let loc = Location::from_relative("", "/schools?size=25&tab=x");
        let nav = reduce(&config(), &loc, &FilterAction::Reset);
        assert_eq!(nav, Navigation { target: "/schools".into(), mode: NavigationMode::Replace });
    }

    #[test]
    fn reset_without_clean_defaults_writes_every_default() {
        let loc = Location::from_relative("", "/schools?size=25&tab=x");
        let nav = reduce(&config().with_clean_defaults(false), &loc, &FilterAction::Reset);
        assert_eq!(nav.target, "/schools?search=&page=1&size=10");
    }
}
