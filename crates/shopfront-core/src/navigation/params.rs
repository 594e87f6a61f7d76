//! Shareable key-value parameter store.

use std::collections::BTreeMap;
use std::fmt;
use url::form_urlencoded;

/// Key-value parameters that make up a shareable, bookmarkable view.
///
/// The engine reads and writes navigation state only through this
/// interface; how the values are persisted (address bar, history entry,
/// config file) is up to the implementor.
pub trait ParamStore {
    /// Get the value for a key, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Remove a key. Removing a missing key does nothing.
    fn clear(&mut self, key: &str);
}

/// In-memory parameter store with query-string encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, String>,
}

impl QueryParams {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored. When a key repeats, the last value wins.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let values = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { values }
    }

    /// Encode as a query string, keys in sorted order, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.values.iter())
            .finish()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ParamStore for QueryParams {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn clear(&mut self, key: &str) {
        self.values.remove(key);
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
