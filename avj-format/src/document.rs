//! Whole-document decoding
//!
//! The raw text is stripped of every whitespace character before parsing,
//! including whitespace inside string literals, so `"a b"` decodes as `"ab"`.
//! Top-level fields are then classified and decoded one by one and merged into
//! a single object, which is framed as a one-element array.

use crate::decode::Decoder;
use crate::error::{AvjError, Result};
use serde_json::{Map, Value};
use tracing::debug;

/// Remove every whitespace character from `raw`
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Wrap a decoded object in the fixed one-element array framing
pub fn frame(decoded: Map<String, Value>) -> Value {
    Value::Array(vec![Value::Object(decoded)])
}

/// JSON type name used in diagnostics
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Decoder {
    /// Decode every top-level field of `document` into one flat object
    ///
    /// Fields whose value is not an object, whose key is unclassified, or
    /// whose envelope does not decode contribute nothing.
    ///
    /// A `null` root decodes to an empty object; any other non-object root
    /// is an error.
    pub fn decode_document(&self, document: &Value) -> Result<Map<String, Value>> {
        let empty = Map::new();
        let root = match document {
            Value::Object(root) => root,
            Value::Null => &empty,
            other => {
                return Err(AvjError::NotAnObject {
                    found: json_type_name(other),
                })
            }
        };

        let mut decoded = Map::new();
        for (key, value) in root {
            let Some(envelope) = value.as_object() else {
                continue;
            };
            if let Some(value) = self.decode_field(key, envelope) {
                decoded.insert(key.clone(), value);
            }
        }

        debug!(
            fields_in = root.len(),
            fields_out = decoded.len(),
            "decoded document"
        );
        Ok(decoded)
    }

    /// Strip whitespace from `raw`, parse it and decode it into the framed output
    pub fn decode_str(&self, raw: &str) -> Result<Value> {
        Ok(frame(self.decode_document(&parse_str(raw)?)?))
    }
}

/// Strip whitespace from `raw` and parse the result as JSON
pub fn parse_str(raw: &str) -> Result<Value> {
    Ok(serde_json::from_str(&strip_whitespace(raw))?)
}

/// Decode a parsed document with default limits, returning the framed output
pub fn decode_document(document: &Value) -> Result<Value> {
    Ok(frame(Decoder::default().decode_document(document)?))
}

/// Decode raw document text with default limits, returning the framed output
pub fn decode_str(raw: &str) -> Result<Value> {
    Decoder::default().decode_str(raw)
}
