//! The error-carrying accessor.
//!
//! [`Json`] wraps either a value-tree node or a terminal error message, and
//! every operation on it is total: navigation and mutation never panic and
//! always leave a usable accessor behind. Failures travel as values in the
//! same channel as data, which is the whole point: application code can
//! chain `get_key`/`get_index` through uncertain structure and only look at
//! the outcome once, at the end.
//!
//! Two policies inherited by this protocol are easy to trip over and are
//! therefore spelled out here rather than in passing:
//!
//! - **Sticky errors.** Once an accessor is failed it stays failed; the only
//!   way back is building a fresh accessor. Assigning a failed accessor into
//!   a container via [`Json::set_key`]/[`Json::set_index`] replaces the
//!   *parent* with the child's failure.
//! - **Write/read asymmetry on arrays.** Reading an out-of-range index
//!   fails loudly; writing one is silently dropped. See [`Json::set_index`].

pub mod path;

use crate::collections::{Array, Object};
use crate::core::Value;
use crate::error::AccessError;

/// Internal two-state storage: a held tree or a terminal message.
#[derive(Debug, Clone, PartialEq)]
enum State {
    Holding(Value),
    Failed(String),
}

/// An accessor over one JSON-shaped document.
///
/// A `Json` is a value: copying it copies the (immutable, structurally
/// shared) tree reference, never aliasing mutable state. Mutating methods
/// update the receiver binding only; other copies of the same document are
/// unaffected.
///
/// Equality holds when both sides hold structurally equal trees, or both
/// are failed with identical messages. A holding and a failed accessor are
/// never equal.
///
/// ```rust
/// use limber::Json;
///
/// let json = Json::from_text(r#"{"item": {"price": 9.99, "tags": ["new"]}}"#);
/// assert_eq!(json.get_key("item").get_key("price").as_f64(), Some(9.99));
/// assert_eq!(
///     json.get_key("item").get_key("missing").error_message(),
///     Some("Key 'missing' was not found.")
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Json {
    state: State,
}

impl Json {
    // ==================== Construction ====================

    /// Create an accessor holding a null value.
    #[must_use]
    pub fn null() -> Self {
        Self::from(Value::Null)
    }

    /// Create an accessor holding an object.
    pub fn object(object: impl Into<Object>) -> Self {
        Self::from(Value::Object(object.into()))
    }

    /// Create an accessor holding an array.
    pub fn array(array: impl Into<Array>) -> Self {
        Self::from(Value::Array(array.into()))
    }

    /// Create an accessor holding an integer.
    ///
    /// Numbers have a single double-precision representation, so the value
    /// is stored as `f64` immediately; magnitudes beyond ±2^53 lose
    /// precision here.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self::from(Value::from(value))
    }

    /// Create a failed accessor carrying `message`.
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            state: State::Failed(message.into()),
        }
    }

    /// Validate a native graph and wrap the result.
    ///
    /// Produces a holding accessor on success and a failed one (with the
    /// canonical "non json object" message) when the graph contains a leaf
    /// the tree cannot represent.
    #[must_use]
    pub fn from_graph(graph: &serde_json::Value) -> Self {
        match Value::from_json(graph) {
            Some(value) => Self::from(value),
            None => AccessError::NonJsonGraph.into(),
        }
    }

    // ==================== State ====================

    /// The held value, if this accessor is not failed.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match &self.state {
            State::Holding(value) => Some(value),
            State::Failed(_) => None,
        }
    }

    /// The failure message, if this accessor is failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            State::Holding(_) => None,
            State::Failed(message) => Some(message),
        }
    }

    // ==================== Navigation ====================

    /// Navigate to the value under `key`.
    ///
    /// Always returns a usable accessor. The returned child is failed (with
    /// the key-not-found message) when the key is absent or when `self` is
    /// not an object; `self` itself is untouched by reads.
    #[must_use]
    pub fn get_key(&self, key: &str) -> Self {
        match self.value() {
            Some(Value::Object(object)) => match object.try_get(key) {
                Ok(child) => Self::from(child.clone()),
                Err(error) => error.into(),
            },
            _ => AccessError::key_not_found(key).into(),
        }
    }

    /// Navigate to the element at `index`.
    ///
    /// Returns a failed child with the fixed non-array message when `self`
    /// is not an array, and with the out-of-bounds message when `index` is
    /// outside `[0, len)`.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Self {
        match self.value() {
            Some(Value::Array(array)) => match array.try_get(index) {
                Ok(child) => Self::from(child.clone()),
                Err(error) => error.into(),
            },
            _ => AccessError::NonexistantArray.into(),
        }
    }

    // ==================== Mutation ====================

    /// Insert or replace `key` with the value held by `new`.
    ///
    /// If `new` is failed, `self` becomes failed with `new`'s message;
    /// errors propagate upward into the container they are assigned into,
    /// overwriting whatever it held. Otherwise the write is copy-on-write:
    /// only the updated entry is rebuilt and all sibling subtrees are
    /// shared with the previous tree. If `self` is not an object the write
    /// is a silent no-op.
    pub fn set_key(&mut self, key: impl Into<String>, new: Json) {
        match new.state {
            State::Failed(message) => self.state = State::Failed(message),
            State::Holding(value) => {
                if let State::Holding(Value::Object(object)) = &self.state {
                    let updated = object.insert(key, value);
                    self.state = State::Holding(Value::Object(updated));
                }
            }
        }
    }

    /// Replace the element at `index` with the value held by `new`.
    ///
    /// Failed `new` propagates exactly as in [`Json::set_key`]. When `self`
    /// is an array and `index` is within bounds the element is replaced
    /// copy-on-write. An out-of-range `index` is silently dropped; the
    /// write path is deliberately asymmetric with [`Json::get_index`],
    /// which fails loudly. Non-array receivers also ignore the write.
    pub fn set_index(&mut self, index: usize, new: Json) {
        match new.state {
            State::Failed(message) => self.state = State::Failed(message),
            State::Holding(value) => {
                if let State::Holding(Value::Array(array)) = &self.state {
                    if let Ok(updated) = array.set(index, value) {
                        self.state = State::Holding(Value::Array(updated));
                    }
                }
            }
        }
    }

    // ==================== Projections ====================

    /// Cast to a native object, recursively converting every child.
    ///
    /// All-or-nothing: `None` when failed, when the held value is not an
    /// object, or when any descendant is not encodable (non-finite number).
    #[must_use]
    pub fn as_object(&self) -> Option<serde_json::Map<String, serde_json::Value>> {
        match self.value()?.to_json()? {
            serde_json::Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Cast to a native array, recursively converting every element.
    ///
    /// All-or-nothing, like [`Json::as_object`].
    #[must_use]
    pub fn as_array(&self) -> Option<Vec<serde_json::Value>> {
        match self.value()?.to_json()? {
            serde_json::Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The held string, if this accessor holds one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.value()?.as_str()
    }

    /// The held number truncated toward zero.
    ///
    /// Derived from the double view, not stored separately: `9.99` becomes
    /// `9`, `-9.99` becomes `-9`. Values outside ±2^53 are lossy and do not
    /// round-trip.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_f64().map(|double| double as i64)
    }

    /// The held number, if this accessor holds one.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.value()?.as_number()
    }

    /// The held boolean, if this accessor holds one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.value()?.as_bool()
    }

    /// Evidence of a held null, if this accessor holds one.
    #[must_use]
    pub fn as_null(&self) -> Option<()> {
        self.value()?.is_null().then_some(())
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        Self {
            state: State::Holding(value),
        }
    }
}

impl From<AccessError> for Json {
    fn from(error: AccessError) -> Self {
        Self::from_error(error.to_string())
    }
}

impl From<Object> for Json {
    fn from(object: Object) -> Self {
        Self::from(Value::Object(object))
    }
}

impl From<Array> for Json {
    fn from(array: Array) -> Self {
        Self::from(Value::Array(array))
    }
}

impl From<bool> for Json {
    fn from(v: bool) -> Self {
        Self::from(Value::from(v))
    }
}

impl From<i64> for Json {
    fn from(v: i64) -> Self {
        Self::from_i64(v)
    }
}

impl From<f64> for Json {
    fn from(v: f64) -> Self {
        Self::from(Value::from(v))
    }
}

impl From<&str> for Json {
    fn from(v: &str) -> Self {
        Self::from(Value::from(v))
    }
}

impl From<String> for Json {
    fn from(v: String) -> Self {
        Self::from(Value::from(v))
    }
}
