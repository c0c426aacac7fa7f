//! Exact big-integer arithmetic and correctly rounded digit-to-float
//! conversion, shared by the float parser and formatter.

pub(crate) mod bignum;
pub(crate) mod convert;
pub(crate) mod rounding;
