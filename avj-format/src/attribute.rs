//! Scalar attribute decoding rules
//!
//! Each rule takes the envelope object of one field and returns the decoded
//! value, or `None` when the envelope is missing, carries the wrong payload
//! type, or the payload fails to parse. `None` means the field is dropped.

use crate::constants::{FALSE_LITERALS, TRUE_LITERALS};
use crate::types::Envelope;
use serde_json::{Map, Number, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Envelope object: a map from envelope tag to payload
pub type EnvelopeMap = Map<String, Value>;

/// Decode a `BOOL` envelope
pub fn decode_bool(envelope: &EnvelopeMap) -> Option<Value> {
    let payload = string_payload(envelope, Envelope::Bool)?;
    if TRUE_LITERALS.contains(&payload) {
        Some(Value::Bool(true))
    } else if FALSE_LITERALS.contains(&payload) {
        Some(Value::Bool(false))
    } else {
        None
    }
}

/// Decode a `NULL` envelope; only truthy payloads produce an explicit `null`
pub fn decode_null(envelope: &EnvelopeMap) -> Option<Value> {
    let payload = string_payload(envelope, Envelope::Null)?;
    TRUE_LITERALS.contains(&payload).then_some(Value::Null)
}

/// Decode an `N` envelope as a 64-bit float
///
/// Integral values that fit in an `i64` are emitted in integer form so that
/// `"42"` renders as `42` rather than `42.0`. Non-finite results are dropped.
pub fn decode_number(envelope: &EnvelopeMap) -> Option<Value> {
    let payload = string_payload(envelope, Envelope::Number)?;
    let parsed: f64 = payload.parse().ok()?;
    number_value(parsed)
}

/// Decode an `S` envelope
///
/// RFC 3339 timestamps become Unix epoch seconds. Empty payloads are dropped.
pub fn decode_string(envelope: &EnvelopeMap) -> Option<Value> {
    let payload = string_payload(envelope, Envelope::String)?;
    if let Some(seconds) = parse_epoch_seconds(payload) {
        return Some(Value::from(seconds));
    }
    if payload.is_empty() {
        return None;
    }
    Some(Value::String(payload.to_string()))
}

/// Parse an RFC 3339 timestamp into whole seconds since the Unix epoch
///
/// Lowercase `t`/`z` separators are accepted, and a leap second (`:60`) maps
/// to the last second of that minute.
pub fn parse_epoch_seconds(text: &str) -> Option<i64> {
    OffsetDateTime::parse(text, &Rfc3339)
        .ok()
        .map(OffsetDateTime::unix_timestamp)
}

/// Borrow the string payload stored under `tag`
pub(crate) fn string_payload(envelope: &EnvelopeMap, tag: Envelope) -> Option<&str> {
    envelope.get(tag.as_str())?.as_str()
}

fn number_value(value: f64) -> Option<Value> {
    if !value.is_finite() {
        return None;
    }
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        return Some(Value::from(value as i64));
    }
    Number::from_f64(value).map(Value::Number)
}
