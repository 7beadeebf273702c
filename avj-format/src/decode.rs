//! Recursive field, list and map decoding

use crate::attribute::{decode_bool, decode_null, decode_number, decode_string, EnvelopeMap};
use crate::classify::ClassifiedKey;
use crate::limits::Limits;
use crate::types::{Envelope, TypeTag};
use serde_json::{Map, Value};
use tracing::trace;

/// Decoder for attribute-value encoded fields
///
/// Holds no state besides its [`Limits`], so one instance can decode any
/// number of documents.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    limits: Limits,
}

impl Decoder {
    /// Create a decoder with the given limits
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Classify `key` and decode its envelope
    ///
    /// Returns `None` when the key is unclassified or the envelope does not
    /// decode; the caller drops the field.
    pub fn decode_field(&self, key: &str, envelope: &EnvelopeMap) -> Option<Value> {
        self.decode_field_at(key, envelope, 0)
    }

    /// Decode an `L` envelope
    ///
    /// Elements are decoded with the scalar rules only; when an element
    /// carries several envelopes, `S` wins over `N`, which wins over `BOOL`.
    /// An empty result drops the field.
    pub fn decode_list(&self, key: &str, envelope: &EnvelopeMap) -> Option<Value> {
        let items = envelope.get(Envelope::List.as_str())?.as_array()?;
        let values: Vec<Value> = items
            .iter()
            .filter_map(Value::as_object)
            .filter_map(decode_list_element)
            .collect();

        if values.is_empty() {
            trace!(key, "list decoded to no elements");
            return None;
        }
        Some(Value::Array(values))
    }

    /// Decode an `M` envelope
    pub fn decode_map(&self, key: &str, envelope: &EnvelopeMap) -> Option<Value> {
        self.decode_map_at(key, envelope, 0)
    }

    fn decode_field_at(&self, key: &str, envelope: &EnvelopeMap, depth: usize) -> Option<Value> {
        let Some(classified) = ClassifiedKey::new(key) else {
            trace!(key, "key has no type suffix");
            return None;
        };

        let expected = classified.tag.envelope();
        if !envelope.contains_key(expected.as_str()) {
            trace!(key, tag = %classified.tag, envelope = %expected, "envelope tag missing");
            return None;
        }

        let value = match classified.tag {
            TypeTag::Bool => decode_bool(envelope),
            TypeTag::Null => decode_null(envelope),
            TypeTag::Number => decode_number(envelope),
            TypeTag::String => decode_string(envelope),
            TypeTag::List => self.decode_list(key, envelope),
            TypeTag::Map => self.decode_map_at(key, envelope, depth),
        };

        if value.is_none() {
            trace!(key, tag = %classified.tag, "field dropped");
        }
        value
    }

    fn decode_map_at(&self, key: &str, envelope: &EnvelopeMap, depth: usize) -> Option<Value> {
        let fields = envelope.get(Envelope::Map.as_str())?.as_object()?;
        self.decode_map_fields(key, fields, depth + 1).map(Value::Object)
    }

    /// Decode the fields of one map level.
    ///
    /// An entry named `M` holding an object is a doubly-wrapped map: it is
    /// decoded by the same rule and replaces this level, unless this level
    /// produced fields of its own, which take precedence.
    fn decode_map_fields(
        &self,
        key: &str,
        fields: &EnvelopeMap,
        depth: usize,
    ) -> Option<Map<String, Value>> {
        if depth > self.limits.max_depth {
            trace!(key, depth, "map nesting exceeds max depth");
            return None;
        }

        let mut decoded = Map::new();
        let mut flattened = None;

        for (name, value) in fields {
            let Some(inner) = value.as_object() else {
                continue;
            };

            if name == Envelope::Map.as_str() {
                flattened = self.decode_map_fields(key, inner, depth + 1);
            } else if let Some(value) = self.decode_field_at(name, inner, depth) {
                decoded.insert(name.clone(), value);
            }
        }

        if !decoded.is_empty() {
            Some(decoded)
        } else {
            if flattened.is_none() {
                trace!(key, "map decoded to no fields");
            }
            flattened
        }
    }
}

fn decode_list_element(item: &EnvelopeMap) -> Option<Value> {
    decode_string(item)
        .or_else(|| decode_number(item))
        .or_else(|| decode_bool(item))
}
