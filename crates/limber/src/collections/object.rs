//! String-keyed map of values.
//!
//! Uses `im::HashMap` internally which provides:
//! - O(log n) get/insert/remove
//! - Efficient cloning via structural sharing
//!
//! Keys are unique and entry order carries no meaning; equality compares key
//! sets and per-key values only.

use im::HashMap;

use crate::core::Value;
use crate::error::{AccessError, AccessResult};

/// Persistent key-value map with efficient structural sharing.
///
/// All updating methods return a new `Object`; the original is never changed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    inner: HashMap<String, Value>,
}

impl Object {
    /// Create an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Create an object holding exactly one entry.
    pub fn singleton(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            inner: HashMap::unit(key.into(), value.into()),
        }
    }

    /// Get the number of keys.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Get value by key or error.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::KeyNotFound`] if the key is absent.
    pub fn try_get(&self, key: &str) -> AccessResult<&Value> {
        self.get(key)
            .ok_or_else(|| AccessError::key_not_found(key))
    }

    /// Check if key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Insert or replace a key (returns new `Object`, original unchanged).
    #[must_use = "immutable methods return a new instance"]
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut new_map = self.inner.clone();
        new_map.insert(key.into(), value.into());
        Self { inner: new_map }
    }

    /// Iterate over keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.inner.keys()
    }

    /// Iterate over values.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.inner.values()
    }

    /// Iterate over entries.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.inner.iter()
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = im::hashmap::ConsumingIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
