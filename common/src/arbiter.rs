//! Suppression of redundant and re-entrant navigations.

use crate::reducer::FilterAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Issue,
    /// Target equals the current location.
    Redundant,
    /// Same `(path, action)` as the last navigation while the guard is armed.
    /// Only exact repeats are held back; a different action or path is
    /// issued even while the guard is armed, and re-arms it.
    Reentrant,
}

#[derive(Debug, Default)]
pub struct UpdateArbiter {
    last_issued: Option<(String, FilterAction)>,
    guard_armed: bool,
}

impl UpdateArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether a navigation from `current` to `target` for `action`
    /// goes out. An admitted request is recorded and arms the guard.
    pub fn admit(&mut self, path: &str, current: &str, target: &str, action: &FilterAction) -> Admission {
        if target == current {
            return Admission::Redundant;
        }
        if self.guard_armed {
            if let Some((last_path, last_action)) = &self.last_issued {
                if last_path == path && last_action == action {
                    return Admission::Reentrant;
                }
            }
        }
        self.last_issued = Some((path.to_string(), action.clone()));
        self.guard_armed = true;
        Admission::Issue
    }

    pub fn is_guard_armed(&self) -> bool {
        self.guard_armed
    }

    /// Called when the guard window elapses.
    pub fn release(&mut self) {
        self.guard_armed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_defaults::UpdatePayload;
    use crate::reducer::UpdateOptions;

    fn page(n: i64) -> FilterAction {
        FilterAction::Update { payload: UpdatePayload::new().with("page", n), options: UpdateOptions::default() }
    }

    #[test]
    fn repeat_inside_window_is_suppressed() {
        let mut arbiter = UpdateArbiter::new();
        assert_eq!(arbiter.admit("/s", "/s", "/s?page=2", &page(2)), Admission::Issue);
        assert!(arbiter.is_guard_armed());
        assert_eq!(arbiter.admit("/s", "/s", "/s?page=2", &page(2)), Admission::Reentrant);
        arbiter.release();
        assert_eq!(arbiter.admit("/s", "/s", "/s?page=2", &page(2)), Admission::Issue);
    }

    #[test]
    fn distinct_requests_pass_while_armed() {
        let mut arbiter = UpdateArbiter::new();
        assert_eq!(arbiter.admit("/s", "/s", "/s?page=2", &page(2)), Admission::Issue);
        assert_eq!(arbiter.admit("/s", "/s?page=2", "/s?page=3", &page(3)), Admission::Issue);
        assert_eq!(arbiter.admit("/t", "/t", "/t?page=3", &page(3)), Admission::Issue);
    }

    #[test]
    fn no_op_targets_are_redundant() {
        let mut arbiter = UpdateArbiter::new();
        assert_eq!(arbiter.admit("/s", "/s?page=2", "/s?page=2", &page(2)), Admission::Redundant);
        assert!(!arbiter.is_guard_armed());
    }
}
