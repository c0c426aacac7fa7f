//! Formatting of integers and floats into caller-provided buffers.

pub(crate) mod float;
pub(crate) mod integer;

/// Digit characters for every radix up to 36. Uppercase, matching the
/// case-insensitive parser.
pub(crate) const DIGIT_TABLE: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
