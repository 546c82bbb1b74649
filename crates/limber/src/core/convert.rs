//! Conversion between [`Value`] and the native graph (`serde_json::Value`).
//!
//! The native graph is the only place booleans and numbers arrive as
//! distinct leaf kinds, which is why construction goes through it rather
//! than probing values at runtime. Both directions are all-or-nothing: a
//! single unconvertible descendant fails the whole conversion, and no
//! partial tree is ever produced.

use crate::collections::{Array, Object};
use crate::core::value::Value;
use crate::error::AccessError;

impl Value {
    /// Recursively validate a native graph into a value tree.
    ///
    /// Returns `None` if any numeric leaf anywhere in the graph has no
    /// double view (arbitrary-precision numbers); objects and arrays
    /// recurse depth-first and propagate the failure to the root.
    #[must_use]
    pub fn from_json(json: &serde_json::Value) -> Option<Self> {
        match json {
            serde_json::Value::Null => Some(Self::Null),
            serde_json::Value::Bool(b) => Some(Self::Bool(*b)),
            serde_json::Value::Number(n) => n.as_f64().map(Self::Number),
            serde_json::Value::String(s) => Some(Self::String(s.clone())),
            serde_json::Value::Array(items) => items
                .iter()
                .map(Self::from_json)
                .collect::<Option<Vec<_>>>()
                .map(|values| Self::Array(Array::from_vec(values))),
            serde_json::Value::Object(map) => map
                .iter()
                .map(|(key, child)| Self::from_json(child).map(|value| (key.clone(), value)))
                .collect::<Option<Object>>()
                .map(Self::Object),
        }
    }

    /// Project this tree back to the native graph.
    ///
    /// Returns `None` when the tree is not encodable: a non-finite number
    /// has no JSON form, and a container cast succeeds only if every child
    /// casts. There is no partial output.
    #[must_use]
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Self::Null => Some(serde_json::Value::Null),
            Self::Bool(b) => Some(serde_json::Value::Bool(*b)),
            Self::Number(n) => serde_json::Number::from_f64(*n).map(serde_json::Value::Number),
            Self::String(s) => Some(serde_json::Value::String(s.clone())),
            Self::Array(array) => array
                .iter()
                .map(Self::to_json)
                .collect::<Option<Vec<_>>>()
                .map(serde_json::Value::Array),
            Self::Object(object) => object
                .entries()
                .map(|(key, child)| child.to_json().map(|value| (key.clone(), value)))
                .collect::<Option<serde_json::Map<_, _>>>()
                .map(serde_json::Value::Object),
        }
    }
}

impl TryFrom<&serde_json::Value> for Value {
    type Error = AccessError;

    fn try_from(json: &serde_json::Value) -> Result<Self, Self::Error> {
        Self::from_json(json).ok_or(AccessError::NonJsonGraph)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = AccessError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Self::try_from(&json)
    }
}
