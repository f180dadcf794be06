//! Filter-state facade used by list pages.

use std::cell::RefCell;
use std::rc::Rc;

use crate::arbiter::{Admission, UpdateArbiter};
use crate::filter_config::UrlFilterConfig;
use crate::filter_defaults::{FilterState, UpdatePayload};
use crate::filter_value::FilterValue;
use crate::history::History;
use crate::reducer::{FilterAction, UpdateOptions, reduce};
use crate::url_codec::{encode_update, filters_from_query};

/// Reads filters from the current location and writes them back through a
/// [`History`]. All state lives in the URL; the facade only keeps the
/// update arbiter.
pub struct UrlFilters<H: History> {
    config: Rc<UrlFilterConfig>,
    history: H,
    arbiter: Rc<RefCell<UpdateArbiter>>,
}

impl<H: History + Clone> Clone for UrlFilters<H> {
    fn clone(&self) -> Self {
        Self {
            config: Rc::clone(&self.config),
            history: self.history.clone(),
            arbiter: Rc::clone(&self.arbiter),
        }
    }
}

impl<H: History> UrlFilters<H> {
    pub fn new(config: UrlFilterConfig, history: H) -> Self {
        Self {
            config: Rc::new(config),
            history,
            arbiter: Rc::new(RefCell::new(UpdateArbiter::new())),
        }
    }

    pub fn config(&self) -> &UrlFilterConfig {
        &self.config
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn current_filters(&self) -> FilterState {
        filters_from_query(&self.history.location().query, &self.config.defaults)
    }

    /// Returns whether a navigation was issued.
    pub fn update_url(&self, payload: UpdatePayload, options: UpdateOptions) -> bool {
        self.dispatch(FilterAction::Update { payload, options })
    }

    /// Seed the URL with `initial` when it carries no query parameters yet,
    /// and return the state that URL decodes to. A URL that already has
    /// parameters (a shared link, say) is left alone and its decoded state
    /// returned.
    pub fn build_initial_url(&self, initial: &UpdatePayload) -> FilterState {
        let location = self.history.location();
        if !location.query.is_empty() || initial.is_empty() {
            return filters_from_query(&location.query, &self.config.defaults);
        }
        self.dispatch(FilterAction::Seed { initial: initial.clone() });
        let seeded = encode_update(&location.query, initial, &self.config, true);
        filters_from_query(&seeded, &self.config.defaults)
    }

    pub fn reset_filters(&self) -> bool {
        self.dispatch(FilterAction::Reset)
    }

    pub fn has_active_filters(&self) -> bool {
        !self.active_filters().is_empty()
    }

    /// Filters whose decoded value differs from the default.
    pub fn active_filters(&self) -> Vec<(String, FilterValue)> {
        let state = self.current_filters();
        state
            .iter()
            .filter(|(key, value)| self.config.defaults.default_of(key) != Some(*value))
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    pub fn shareable_url(&self) -> String {
        self.history.location().href()
    }

    fn dispatch(&self, action: FilterAction) -> bool {
        let location = self.history.location();
        let navigation = reduce(&self.config, &location, &action);
        let admission = self.arbiter.borrow_mut().admit(
            &location.path,
            &location.relative(),
            &navigation.target,
            &action,
        );
        match admission {
            Admission::Issue => {}
            Admission::Redundant => {
                tracing::debug!(target_url = %navigation.target, "filter navigation skipped, location unchanged");
                return false;
            }
            Admission::Reentrant => {
                tracing::debug!(target_url = %navigation.target, "filter navigation skipped, repeated inside guard window");
                return false;
            }
        }
        tracing::info!(target_url = %navigation.target, mode = ?navigation.mode, "filter navigation");
        self.history.navigate(&navigation);
        let arbiter = Rc::clone(&self.arbiter);
        self.history.schedule(
            self.config.guard_window(),
            Box::new(move || {
                arbiter.borrow_mut().release();
                tracing::debug!("filter navigation guard released");
            }),
        );
        true
    }
}
