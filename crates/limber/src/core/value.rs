//! The unified `Value` enum.
//!
//! This is the central type of the crate: one immutable, acyclic, finite
//! tree node per JSON-shaped value. There is deliberately no integer
//! variant: every numeric leaf is an IEEE-754 double, exactly as a JSON
//! codec would hand it over, and integer extraction is a truncating view
//! provided by the accessor.

use crate::collections::{Array, Object};
use crate::core::kind::ValueKind;

/// One node of a JSON-shaped document.
///
/// The tree is never mutated in place: any logical mutation produces a new
/// `Value` rooted at a new node, sharing unrelated children with the
/// original (see [`crate::collections`]).
///
/// Equality is deep and structural: objects compare by key set and per-key
/// values (order-independent), arrays pairwise in order, scalars by value.
/// `Number` compares as `f64`, so `NaN` is not equal to itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null value.
    #[default]
    Null,

    /// Boolean value.
    Bool(bool),

    /// Numeric value, always a double.
    Number(f64),

    /// UTF-8 text.
    String(String),

    /// Ordered sequence of values.
    Array(Array),

    /// String-keyed map of values.
    Object(Object),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value.
    #[must_use]
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value.
    #[must_use]
    pub const fn boolean(v: bool) -> Self {
        Self::Bool(v)
    }

    /// Create a numeric value.
    #[must_use]
    pub const fn number(v: f64) -> Self {
        Self::Number(v)
    }

    /// Create a text value from `String` or `&str`.
    pub fn text(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create an empty array value.
    #[must_use]
    pub fn array_empty() -> Self {
        Self::Array(Array::new())
    }

    /// Create an empty object value.
    #[must_use]
    pub fn object_empty() -> Self {
        Self::Object(Object::new())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Check if this is null.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is a boolean.
    #[inline]
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Check if this is a number.
    #[inline]
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Check if this is text.
    #[inline]
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Check if this is an array.
    #[inline]
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check if this is an object.
    #[inline]
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    // ==================== Borrowing projections ====================

    /// Try to get as boolean.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as double.
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Try to get as array reference.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as object reference.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }
}

// ==================== From implementations ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        // Numbers have a single representation; integers lose precision
        // beyond +/-2^53.
        Self::number(v as f64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::number(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::text(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(Array::from_vec(v))
    }
}
