//! Literal tables and default limits for the AVJ format

/// Payloads accepted as boolean `true` (and as "present" for `NULL` envelopes).
pub const TRUE_LITERALS: [&str; 6] = ["1", "t", "T", "TRUE", "true", "True"];

/// Payloads accepted as boolean `false`.
pub const FALSE_LITERALS: [&str; 6] = ["0", "f", "F", "FALSE", "false", "False"];

/// Default cap on raw input size (64 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024 * 1024;

/// Default cap on nested map depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;
