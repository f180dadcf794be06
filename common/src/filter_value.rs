//! Typed filter values and their string form in the query string.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Declared type of a filter field. Decides how a raw query value is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    #[serde(alias = "string")]
    Text,
    #[serde(alias = "integer")]
    Number,
    #[serde(alias = "boolean", alias = "bool")]
    Flag,
}

impl Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Number => write!(f, "number"),
            Self::Flag => write!(f, "flag"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FilterValue {
    Flag(bool),
    Number(i64),
    Text(String),
    /// No value. Absent from the URL, and removes the key when used in an update.
    #[default]
    Unset,
}

impl FilterValue {
    pub fn kind(&self) -> Option<FilterKind> {
        match self {
            Self::Text(_) => Some(FilterKind::Text),
            Self::Number(_) => Some(FilterKind::Number),
            Self::Flag(_) => Some(FilterKind::Flag),
            Self::Unset => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// String written to the query string, `None` for `Unset`.
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.clone()),
            Self::Number(n) => Some(n.to_string()),
            Self::Flag(b) => Some(if *b { "true" } else { "false" }.to_string()),
            Self::Unset => None,
        }
    }

    /// Parse a raw query value as `kind`. `None` means the raw value is unusable
    /// and the caller keeps the default.
    pub fn parse_as(kind: FilterKind, raw: &str) -> Option<Self> {
        match kind {
            FilterKind::Text => Some(Self::Text(raw.to_string())),
            FilterKind::Number => parse_leading_integer(raw).map(Self::Number),
            FilterKind::Flag => Some(Self::Flag(raw == "true")),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

// integer literals such as `.with("page", 2)` resolve to i32
impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Number(value as i64)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Unset)
    }
}

impl Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_query_value() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "<unset>"),
        }
    }
}

/// Leading integer of `raw`: optional whitespace, optional sign, then digits.
/// Anything after the digits is ignored. No digits or overflow gives `None`.
fn parse_leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign_len = if s.starts_with('-') || s.starts_with('+') { 1 } else { 0 };
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }
    s[..sign_len + digits_len].parse::<i64>().ok()
}
