//! Byte-level parsers for integers and floats.

pub(crate) mod float;
pub(crate) mod integer;
pub(crate) mod shared;
