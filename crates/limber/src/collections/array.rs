//! Ordered sequence of values.
//!
//! Uses `im::Vector` internally which provides:
//! - O(log n) get/set/push
//! - Efficient cloning via structural sharing

use std::fmt;

use im::Vector;

use crate::core::Value;
use crate::error::{AccessError, AccessResult};

/// Persistent array with efficient structural sharing.
///
/// All updating methods return a new `Array`; the original is never changed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    inner: Vector<Value>,
}

impl Array {
    /// Create an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Vector::new(),
        }
    }

    /// Create from a `Vec`.
    #[must_use]
    pub fn from_vec(vec: Vec<Value>) -> Self {
        Self {
            inner: Vector::from(vec),
        }
    }

    /// Get the length.
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

    /// Get element at index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.inner.get(index)
    }

    /// Get element at index or error.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::IndexOutOfBounds`] if `index >= len()`.
    pub fn try_get(&self, index: usize) -> AccessResult<&Value> {
        self.get(index)
            .ok_or_else(|| AccessError::index_out_of_bounds(index))
    }

    /// Push an element (returns new `Array`, original unchanged).
    #[must_use = "immutable methods return a new instance"]
    pub fn push(&self, value: impl Into<Value>) -> Self {
        let mut new_vec = self.inner.clone();
        new_vec.push_back(value.into());
        Self { inner: new_vec }
    }

    /// Set element at index (returns new `Array`).
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::IndexOutOfBounds`] if `index >= len()`.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> AccessResult<Self> {
        if index >= self.len() {
            return Err(AccessError::index_out_of_bounds(index));
        }

        let mut new_vec = self.inner.clone();
        new_vec.set(index, value.into());
        Ok(Self { inner: new_vec })
    }

    /// Create iterator over borrowed elements.
    pub fn iter(&self) -> im::vector::Iter<'_, Value> {
        self.inner.iter()
    }

    /// Convert to `Vec` (allocates).
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.inner.iter().cloned().collect()
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, item) in self.inner.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<Value>> for Array {
    fn from(vec: Vec<Value>) -> Self {
        Self::from_vec(vec)
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = im::vector::ConsumingIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = im::vector::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_creation() {
        let arr = Array::new();
        assert_eq!(arr.len(), 0);
        assert!(arr.is_empty());
    }

    #[test]
    fn test_array_from_vec() {
        let arr = Array::from_vec(vec![
            Value::number(1.0),
            Value::number(2.0),
            Value::number(3.0),
        ]);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.get(0), Some(&Value::number(1.0)));
    }

    #[test]
    fn test_array_set_is_persistent() {
        let arr1 = Array::from_vec(vec![Value::text("a"), Value::text("b")]);
        let arr2 = arr1.set(1, Value::text("c")).unwrap();

        assert_eq!(arr1.get(1), Some(&Value::text("b")));
        assert_eq!(arr2.get(1), Some(&Value::text("c")));
    }

    #[test]
    fn test_array_set_out_of_bounds() {
        let arr = Array::from_vec(vec![Value::Null]);
        let err = arr.set(1, Value::Null).unwrap_err();
        assert_eq!(err, AccessError::index_out_of_bounds(1));
    }

    #[test]
    fn test_array_try_get() {
        let arr = Array::from_vec(vec![Value::boolean(true)]);
        assert!(arr.try_get(0).is_ok());
        assert_eq!(
            arr.try_get(3).unwrap_err().to_string(),
            "Index '3' is out of bounds."
        );
    }

    #[test]
    fn test_array_push_shares_structure() {
        let arr1 = Array::from_vec(vec![Value::number(1.0), Value::number(2.0)]);
        let arr2 = arr1.push(Value::number(3.0));

        assert_eq!(arr1.len(), 2);
        assert_eq!(arr2.len(), 3);
    }

    #[test]
    fn test_array_to_vec_round_trips() {
        let items = vec![Value::text("a"), Value::Null];
        let arr = Array::from_vec(items.clone());
        assert_eq!(arr.to_vec(), items);
    }
}
