//! Query parameter builder.
//!
//! Asaas filters are plain query strings with camelCase keys and occasional
//! bracketed range suffixes (`dateCreated[ge]`). Unset values are never sent.

use std::fmt::Display;

use serde::Serialize;

/// Ordered query parameters.
///
/// Setting a key that is already present replaces its value in place.
///
/// ```
/// use asaas_core::Params;
///
/// let params = Params::new()
///     .set("customer", "cus_123")
///     .set_opt("status", None::<&str>)
///     .set("limit", 10)
///     .set("limit", 20);
///
/// assert_eq!(params.get("limit"), Some("20"));
/// assert_eq!(params.get("status"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` when `value` is `Some`; `None` leaves the parameters unchanged.
    #[must_use]
    pub fn set_opt<V: Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Set the page window.
    #[must_use]
    pub fn page(self, offset: u64, limit: u32) -> Self {
        self.set("offset", offset).set("limit", limit)
    }

    /// Copy every pair of `other` into `self`, overwriting shared keys.
    #[must_use]
    pub fn merge(mut self, other: &Params) -> Self {
        for (key, value) in &other.0 {
            self.insert(key.clone(), value);
        }
        self
    }

    /// In-place form of [`Params::set`].
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        let key = key.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Remove `key` if present.
    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    /// Value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
