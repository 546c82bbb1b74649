//! Access error types (standalone).
//!
//! Every failure in this crate is a value, never a panic. The accessor keeps
//! failures as rendered strings (so arbitrary messages from
//! [`Json::from_error`](crate::Json::from_error) and built-in failures live in
//! the same channel), and this enum is the single source of those rendered
//! messages. Consumers match on message text, so the `#[error]` templates
//! below are part of the public contract and must not be reworded.

use thiserror::Error;

/// Failures produced by navigation, construction, and decoding.
///
/// The rendered `Display` output is the entire diagnostic surface: there is
/// no error code, no source chain, and no retry semantics. Once a failure
/// reaches an accessor it is sticky (see [`Json`](crate::Json)).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Object navigation with a key the object does not have, or key
    /// navigation on a non-object.
    #[error("Key '{key}' was not found.")]
    KeyNotFound {
        /// The key that was requested.
        key: String,
    },

    /// Index navigation on something that is not an array.
    #[error("Attempted to access a nonexistant array.")]
    NonexistantArray,

    /// Index navigation outside `[0, len)`.
    #[error("Index '{index}' is out of bounds.")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
    },

    /// A native graph contained a leaf with no double view, so no value
    /// tree could be built from it.
    #[error("Initialised Json with a non json object.")]
    NonJsonGraph,

    /// Byte input that the codec could not decode.
    #[error("Initialised Json with invalid data.")]
    InvalidData,

    /// Text input that the codec could not decode.
    #[error("Initialised Json with invalid string.")]
    InvalidText,

    /// A path string that the dot/bracket syntax could not parse.
    #[error("Path '{path}' could not be parsed.")]
    MalformedPath {
        /// The offending path string.
        path: String,
    },
}

impl AccessError {
    /// Create a key-not-found error.
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create an index-out-of-bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize) -> Self {
        Self::IndexOutOfBounds { index }
    }

    /// Create a malformed-path error.
    pub fn malformed_path(path: impl Into<String>) -> Self {
        Self::MalformedPath { path: path.into() }
    }
}

/// Result type alias for fallible collection operations.
pub type AccessResult<T> = Result<T, AccessError>;
