//! Iteration over array- and object-backed accessors.
//!
//! [`Json::iter`] yields owned [`Json`] items. Because the underlying tree
//! is immutable, the iterator works off an O(1) snapshot: iterating the
//! same accessor twice reproduces the same sequence, and no concurrent
//! mutation can be observed mid-iteration.
//!
//! **Object iteration yields singleton objects.** Each item produced from
//! an object-backed accessor is a one-entry object `{key: value}` wrapped
//! in a holding accessor, not the bare value. The shape is unusual but it
//! keeps key and value paired without a separate tuple surface, and
//! consumers depend on it; retrieve the entry with another `get_key`.

use crate::collections::Object;
use crate::core::Value;
use crate::json::Json;

/// Iterator over the items of a [`Json`] accessor.
///
/// Array-backed accessors yield one holding accessor per element in array
/// order. Object-backed accessors yield one singleton-object accessor per
/// entry in unspecified order (see the module docs). Every other accessor
/// (scalar, null, or failed) yields nothing: iteration failure is silent.
pub struct Iter {
    inner: IterInner,
}

enum IterInner {
    Array(im::vector::ConsumingIter<Value>),
    Object(im::hashmap::ConsumingIter<(String, Value)>),
    Empty,
}

impl Iterator for Iter {
    type Item = Json;

    fn next(&mut self) -> Option<Json> {
        match &mut self.inner {
            IterInner::Array(elements) => elements.next().map(Json::from),
            IterInner::Object(entries) => entries
                .next()
                .map(|(key, value)| Json::from(Object::singleton(key, value))),
            IterInner::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Array(elements) => elements.size_hint(),
            IterInner::Object(entries) => entries.size_hint(),
            IterInner::Empty => (0, Some(0)),
        }
    }
}

impl Json {
    /// Iterate over the items of this accessor.
    ///
    /// See [`Iter`] for the exact per-variant behavior, in particular the
    /// singleton-object shape of object iteration.
    #[must_use]
    pub fn iter(&self) -> Iter {
        let inner = match self.value() {
            Some(Value::Array(array)) => IterInner::Array(array.clone().into_iter()),
            Some(Value::Object(object)) => IterInner::Object(object.clone().into_iter()),
            _ => IterInner::Empty,
        };
        Iter { inner }
    }
}

impl IntoIterator for &Json {
    type Item = Json;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
