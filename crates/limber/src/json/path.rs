//! Path-based access for [`Json`].
//!
//! Supports a dot/bracket syntax for reaching into nested structure in one
//! call: `item.tags[0].id`. A path operation is nothing more than the
//! composition of the single-step protocol: `get_path` chains
//! [`Json::get_key`]/[`Json::get_index`], and `set_path` performs the
//! recursive get-modify-set that the single-step writes imply, so a failed
//! accessor assigned deep in a tree taints every ancestor up to the root
//! exactly as nested single-step writes would.

use crate::error::AccessError;
use crate::json::Json;

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object key access: `.key`
    Key(String),
    /// Array index access: `[index]`
    Index(usize),
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl Json {
    /// Navigate along a parsed segment sequence.
    ///
    /// An empty path returns a copy of `self`. Each step applies the
    /// single-step protocol, so the first failure travels through the rest
    /// of the chain untouched.
    #[must_use]
    pub fn get_segments(&self, segments: &[Segment]) -> Json {
        let mut current = self.clone();
        for segment in segments {
            current = match segment {
                Segment::Key(key) => current.get_key(key),
                Segment::Index(index) => current.get_index(*index),
            };
        }
        current
    }

    /// Navigate along a `dot.and[0].bracket` path string.
    ///
    /// An unparseable path yields a failed accessor.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Json {
        match parse_path(path) {
            Ok(segments) => self.get_segments(&segments),
            Err(error) => error.into(),
        }
    }

    /// Write `new` at the end of a parsed segment sequence.
    ///
    /// Implemented as recursive get-modify-set: the addressed subtree is
    /// read, updated, and assigned back at every level, which rebuilds only
    /// the spine from the root to the written slot and propagates a failed
    /// `new` (or a failed intermediate read) all the way up to `self`. An
    /// empty path replaces `self` wholesale.
    pub fn set_segments(&mut self, segments: &[Segment], new: Json) {
        match segments {
            [] => *self = new,
            [last] => match last {
                Segment::Key(key) => self.set_key(key.clone(), new),
                Segment::Index(index) => self.set_index(*index, new),
            },
            [head, rest @ ..] => {
                let mut child = match head {
                    Segment::Key(key) => self.get_key(key),
                    Segment::Index(index) => self.get_index(*index),
                };
                child.set_segments(rest, new);
                match head {
                    Segment::Key(key) => self.set_key(key.clone(), child),
                    Segment::Index(index) => self.set_index(*index, child),
                }
            }
        }
    }

    /// Write `new` at the end of a `dot.and[0].bracket` path string.
    ///
    /// An unparseable path drops the write silently, matching the
    /// write-path policy of [`Json::set_index`].
    pub fn set_path(&mut self, path: &str, new: Json) {
        if let Ok(segments) = parse_path(path) {
            self.set_segments(&segments, new);
        }
    }
}

/// Parse a path string into segments.
///
/// Examples:
/// - `"user.name"` → `[Key("user"), Key("name")]`
/// - `"items[0]"` → `[Key("items"), Index(0)]`
/// - `"data[0].value"` → `[Key("data"), Index(0), Key("value")]`
///
/// # Errors
///
/// Returns [`AccessError::MalformedPath`] when a bracket holds anything but
/// a plain decimal index or is left unclosed.
pub fn parse_path(path: &str) -> Result<Vec<Segment>, AccessError> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '.' => {
                if !current.is_empty() {
                    segments.push(Segment::Key(std::mem::take(&mut current)));
                }
            }
            '[' => {
                if !current.is_empty() {
                    segments.push(Segment::Key(std::mem::take(&mut current)));
                }

                let mut index_str = String::new();
                let mut closed = false;
                for ch in chars.by_ref() {
                    if ch == ']' {
                        closed = true;
                        break;
                    }
                    index_str.push(ch);
                }
                if !closed {
                    return Err(AccessError::malformed_path(path));
                }

                let index = index_str
                    .parse::<usize>()
                    .map_err(|_| AccessError::malformed_path(path))?;
                segments.push(Segment::Index(index));
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        segments.push(Segment::Key(current));
    }

    Ok(segments)
}
