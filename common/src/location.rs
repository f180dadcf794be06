//! Current location as seen by the filter facade.

use crate::query_params::QueryParams;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    /// Scheme, host and port, e.g. `https://yayasan.example`. Empty when unknown.
    pub origin: String,
    pub path: String,
    pub query: QueryParams,
}

impl Location {
    pub fn new(origin: impl Into<String>, path: impl Into<String>, search: &str) -> Self {
        Self { origin: origin.into(), path: path.into(), query: QueryParams::parse(search) }
    }

    /// Split a relative target such as `/schools?page=2` into path and query.
    pub fn from_relative(origin: impl Into<String>, target: &str) -> Self {
        let target = target.split('#').next().unwrap_or_default();
        match target.split_once('?') {
            Some((path, search)) => Self::new(origin, path, search),
            None => Self::new(origin, target, ""),
        }
    }

    pub fn search(&self) -> String {
        self.query.to_search()
    }

    /// Path plus query, the form used as a navigation target.
    pub fn relative(&self) -> String {
        format!("{}{}", self.path, self.search())
    }

    pub fn href(&self) -> String {
        format!("{}{}", self.origin, self.relative())
    }
}
