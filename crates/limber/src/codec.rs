//! The byte/text boundary.
//!
//! Decoding and encoding delegate to `serde_json`; the core only defines
//! what happens on either side of that call. Decode failures become failed
//! accessors with the canonical messages, and encoding is gated on the
//! all-or-nothing cast back to the native graph. A failed accessor or an
//! unencodable tree (non-finite numbers) yields `None`, never a panic and
//! never partial output.

use crate::core::Value;
use crate::error::AccessError;
use crate::json::Json;

impl Json {
    /// Decode a JSON document from bytes.
    ///
    /// Always returns a usable accessor: undecodable input produces a
    /// failed one carrying the fixed invalid-data message.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<serde_json::Value>(bytes) {
            Ok(graph) => Self::from_graph(&graph),
            Err(_) => AccessError::InvalidData.into(),
        }
    }

    /// Decode a JSON document from text.
    ///
    /// Always returns a usable accessor: undecodable input produces a
    /// failed one carrying the fixed invalid-string message.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(graph) => Self::from_graph(&graph),
            Err(_) => AccessError::InvalidText.into(),
        }
    }

    /// Encode the held tree as JSON bytes.
    ///
    /// `None` when this accessor is failed or the tree has no JSON form.
    /// Only the shape and values are guaranteed; key order and whitespace
    /// are not part of the contract.
    #[must_use]
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        let graph = self.encodable_graph()?;
        serde_json::to_vec(&graph).ok()
    }

    /// Encode the held tree as a JSON string.
    ///
    /// Same gating as [`Json::to_bytes`].
    #[must_use]
    pub fn to_json_string(&self) -> Option<String> {
        let graph = self.encodable_graph()?;
        serde_json::to_string(&graph).ok()
    }

    fn encodable_graph(&self) -> Option<serde_json::Value> {
        self.value().and_then(Value::to_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_decodes() {
        let json = Json::from_bytes(br#"{"id": 2}"#);
        assert_eq!(json.get_key("id").as_i64(), Some(2));
    }

    #[test]
    fn test_from_bytes_invalid() {
        let json = Json::from_bytes(b"{not json");
        assert_eq!(
            json.error_message(),
            Some("Initialised Json with invalid data.")
        );
    }

    #[test]
    fn test_from_text_decodes() {
        let json = Json::from_text(r#"["a", true, null]"#);
        assert_eq!(json.get_index(1).as_bool(), Some(true));
    }

    #[test]
    fn test_from_text_invalid() {
        let json = Json::from_text("{broken");
        assert_eq!(
            json.error_message(),
            Some("Initialised Json with invalid string.")
        );
    }

    #[test]
    fn test_from_text_accepts_scalar_documents() {
        // Bare fragments are valid documents at this boundary.
        assert_eq!(Json::from_text("42").as_i64(), Some(42));
        assert_eq!(Json::from_text("\"lone\"").as_str(), Some("lone"));
    }

    #[test]
    fn test_encode_failed_accessor() {
        assert_eq!(Json::from_error("error").to_bytes(), None);
        assert_eq!(Json::from_error("error").to_json_string(), None);
    }

    #[test]
    fn test_encode_rejects_non_finite() {
        assert_eq!(Json::from(f64::NAN).to_bytes(), None);
        assert_eq!(Json::from(f64::INFINITY).to_json_string(), None);
    }

    #[test]
    fn test_round_trip() {
        let original = Json::from_text(r#"{"item": {"price": 9.99, "tags": [1, 2]}}"#);
        let bytes = original.to_bytes().unwrap();
        assert_eq!(Json::from_bytes(&bytes), original);
    }
}
