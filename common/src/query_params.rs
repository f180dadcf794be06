//! Ordered query-string parameters with URLSearchParams semantics.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without the leading `?`.
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        Self {
            pairs: form_urlencoded::parse(search.as_bytes()).into_owned().collect(),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Replace the first entry for `key` in place and drop the rest,
    /// or append when the key is new.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut i = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = i <= first || k != key;
                    i += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Remove every entry for `key`.
    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `?`-prefixed form, or the empty string when there are no parameters.
    pub fn to_search(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("?{}", self)
        }
    }
}

// Serialized without the leading `?`
impl Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            serializer.append_pair(k, v);
        }
        write!(f, "{}", serializer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decodes_and_keeps_order() {
        let q = QueryParams::parse("?b=2&a=hello+world&c=%2B1");
        let pairs: Vec<_> = q.iter().collect();
        assert_eq!(pairs, vec![("b", "2"), ("a", "hello world"), ("c", "+1")]);
        assert_eq!(q.to_string(), "b=2&a=hello+world&c=%2B1");
    }

    #[test]
    fn set_replaces_first_and_drops_duplicates() {
        let mut q = QueryParams::parse("x=1&page=2&y=3&page=4");
        q.set("page", "5");
        assert_eq!(q.to_string(), "x=1&page=5&y=3");
        q.set("size", "10");
        assert_eq!(q.to_string(), "x=1&page=5&y=3&size=10");
    }

    #[test]
    fn delete_removes_all_entries() {
        let mut q = QueryParams::parse("a=1&b=2&a=3");
        q.delete("a");
        assert_eq!(q.to_search(), "?b=2");
        q.delete("b");
        assert_eq!(q.to_search(), "");
    }

    #[test]
    fn empty_search_has_no_params() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
        assert_eq!(QueryParams::parse("?flag").get("flag"), Some(""));
    }
}
