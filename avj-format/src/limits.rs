//! Resource limits

use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_BYTES};
use crate::error::{AvjError, Result};

/// Limits applied while reading and decoding a document
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum raw input size in bytes (default: 64 MiB)
    pub max_input_bytes: usize,
    /// Maximum nested map depth; deeper maps are dropped (default: 64)
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Limits {
    /// Reject inputs larger than `max_input_bytes`
    pub fn check_input_len(&self, len: usize) -> Result<()> {
        if len > self.max_input_bytes {
            return Err(AvjError::LimitExceeded(format!(
                "input is {} bytes (max: {} bytes)",
                len, self.max_input_bytes
            )));
        }
        Ok(())
    }
}
