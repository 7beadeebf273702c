//! AVJ Format - Core primitives for Attribute-Value JSON decoding
//!
//! This crate decodes documents whose fields are wrapped in type envelopes
//! (`{"S": ...}`, `{"N": ...}`, `{"BOOL": ...}`, `{"NULL": ...}`, `{"L": [...]}`,
//! `{"M": {...}}`) into plain JSON, inferring each field's type from a
//! `_<type>_<digits>` suffix on its key. It has no I/O dependencies and includes:
//!
//! - Type tags and envelope tags
//! - Key classification
//! - Scalar attribute rules (bool, null, number, string)
//! - Recursive list and map decoding
//! - Whole-document decoding and whitespace pre-processing
//! - Error types
//! - Resource limits
//!
//! Malformed or unsupported fields never produce errors; they are dropped from
//! the output. Errors are reserved for conditions that abort a whole run.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod attribute;
pub mod classify;
pub mod constants;
pub mod decode;
pub mod document;
pub mod error;
pub mod limits;
pub mod types;

// Re-export commonly used types
pub use attribute::EnvelopeMap;
pub use classify::{classify, ClassifiedKey};
pub use decode::Decoder;
pub use document::{decode_document, decode_str, frame, parse_str, strip_whitespace};
pub use error::{AvjError, Result};
pub use limits::Limits;
pub use types::{Envelope, TypeTag};
