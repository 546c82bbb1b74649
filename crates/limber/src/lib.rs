//! Flexible, exception-free access to JSON-shaped data.
//!
//! `limber` models a JSON document as an immutable, structurally shared
//! value tree ([`Value`]) and hands out an error-carrying accessor
//! ([`Json`]) over it. Every navigation and mutation on the accessor is
//! total: nothing panics, nothing throws. A failure is just another value
//! that rides along until you ask for it:
//!
//! ```rust
//! use limber::Json;
//!
//! let mut json = Json::from_text(
//!     r#"{"item": {"id": 1, "price": 9.99, "tags": [{"id": 2}]}}"#,
//! );
//!
//! // Navigate optimistically; check the outcome once.
//! assert_eq!(json.get_path("item.tags[0].id").as_i64(), Some(2));
//! assert_eq!(
//!     json.get_path("item.missing").error_message(),
//!     Some("Key 'missing' was not found.")
//! );
//!
//! // Mutation is copy-on-write over a persistent tree.
//! let snapshot = json.clone();
//! json.set_path("item.price", Json::from(5.0));
//! assert_eq!(snapshot.get_path("item.price").as_f64(), Some(9.99));
//! assert_eq!(json.get_path("item.price").as_f64(), Some(5.0));
//! ```
//!
//! Failures are **sticky**: assigning a failed accessor into a container
//! replaces the container with the failure, and nothing short of building a
//! fresh accessor clears it. The failure messages themselves are a stable
//! surface that consumers match on, produced exclusively by
//! [`AccessError`].

#![warn(clippy::all)]

pub mod codec;
pub mod collections;
pub mod core;
pub mod error;
pub mod iter;
pub mod json;

pub use crate::collections::{Array, Object};
pub use crate::core::{Value, ValueKind};
pub use crate::error::{AccessError, AccessResult};
pub use crate::iter::Iter;
pub use crate::json::Json;
pub use crate::json::path::{Segment, parse_path};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{AccessError, Array, Json, Object, Segment, Value, ValueKind};
}
