//! The navigation seam between the filter facade and the host environment.

use std::cell::RefCell;
use std::time::Duration;

use crate::location::Location;
use crate::reducer::{Navigation, NavigationMode};

pub trait History {
    fn location(&self) -> Location;
    /// Fire-and-forget navigation.
    fn navigate(&self, navigation: &Navigation);
    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// In-memory history with a back stack, a navigation log and timers that
/// only run when asked to.
pub struct MemoryHistory {
    origin: String,
    entries: RefCell<Vec<String>>,
    navigations: RefCell<Vec<Navigation>>,
    timers: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
}

impl MemoryHistory {
    pub fn new(origin: impl Into<String>, start: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            entries: RefCell::new(vec![start.into()]),
            navigations: RefCell::new(Vec::new()),
            timers: RefCell::new(Vec::new()),
        }
    }

    pub fn current(&self) -> String {
        self.entries.borrow().last().cloned().unwrap_or_default()
    }

    /// Every navigation issued so far.
    pub fn navigations(&self) -> Vec<Navigation> {
        self.navigations.borrow().clone()
    }

    pub fn depth(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Pop the current entry, like the browser back button. Returns false at
    /// the first entry.
    pub fn back(&self) -> bool {
        let mut entries = self.entries.borrow_mut();
        if entries.len() <= 1 {
            return false;
        }
        entries.pop();
        true
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Run every scheduled task, as if their delays had elapsed.
    pub fn run_timers(&self) {
        let timers = std::mem::take(&mut *self.timers.borrow_mut());
        for (_, task) in timers {
            task();
        }
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Location {
        Location::from_relative(self.origin.clone(), &self.current())
    }

    fn navigate(&self, navigation: &Navigation) {
        let mut entries = self.entries.borrow_mut();
        match navigation.mode {
            NavigationMode::Push => entries.push(navigation.target.clone()),
            NavigationMode::Replace => match entries.last_mut() {
                Some(last) => *last = navigation.target.clone(),
                None => entries.push(navigation.target.clone()),
            },
        }
        self.navigations.borrow_mut().push(navigation.clone());
    }

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.timers.borrow_mut().push((delay, task));
    }
}

impl<H: History + ?Sized> History for std::rc::Rc<H> {
    fn location(&self) -> Location {
        (**self).location()
    }

    fn navigate(&self, navigation: &Navigation) {
        (**self).navigate(navigation)
    }

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        (**self).schedule(delay, task)
    }
}
