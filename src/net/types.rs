//! Wire payloads exchanged with the login and dashboard endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use serde_json::Value;

/// Ordered key-value pairs collected from a form at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// First value submitted under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Error body returned by the login endpoint on failure.
///
/// `detail` is either a plain string or, for request validation failures, a
/// list of entries carrying a `msg`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorPayload {
    pub detail: Value,
}

impl ErrorPayload {
    /// Human-readable reason, or `None` when `detail` has no usable text.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        match &self.detail {
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if msgs.is_empty() { None } else { Some(msgs.join("; ")) }
            }
            _ => None,
        }
    }
}
