//! Error type shared by all parse entry points.
//!
//! Every failure carries the byte offset where the violation was detected,
//! so callers can point at the offending byte in diagnostics.

use thiserror::Error;

/// Category of parse failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The value is too large for the target type.
    Overflow,
    /// The value is too small for the target type.
    Underflow,
    /// A byte was not a valid digit (or separator) at its position.
    InvalidDigit,
    /// The input was empty, or contained only a sign.
    Empty,
    /// A float had no digits in its mantissa.
    EmptyMantissa,
    /// An exponent marker was present but required digits were missing.
    EmptyExponent,
    /// The grammar requires integer digits and none were present.
    EmptyInteger,
    /// The grammar requires fraction digits after the point and none were present.
    EmptyFraction,
    /// A `+` mantissa sign appeared but the grammar forbids it.
    InvalidPositiveMantissaSign,
    /// The grammar requires an explicit mantissa sign and none was present.
    MissingMantissaSign,
    /// Exponent notation appeared but the grammar forbids it.
    InvalidExponent,
    /// A `+` exponent sign appeared but the grammar forbids it.
    InvalidPositiveExponentSign,
    /// The grammar requires an explicit exponent sign and none was present.
    MissingExponentSign,
    /// An exponent appeared without a preceding fraction, which the grammar forbids.
    ExponentWithoutFraction,
    /// A leading zero preceded other digits, which the grammar forbids.
    InvalidLeadingZeros,
}

/// A parse failure: what went wrong and where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{code:?} at byte {index}")]
pub struct Error {
    code: ErrorCode,
    index: usize,
}

impl Error {
    #[inline]
    pub const fn new(code: ErrorCode, index: usize) -> Self {
        Self { code, index }
    }

    /// The failure category.
    #[inline]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Byte offset into the input where the failure was detected.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub const fn is_overflow(&self) -> bool {
        matches!(self.code, ErrorCode::Overflow)
    }

    #[inline]
    pub const fn is_underflow(&self) -> bool {
        matches!(self.code, ErrorCode::Underflow)
    }

    #[inline]
    pub const fn is_invalid_digit(&self) -> bool {
        matches!(self.code, ErrorCode::InvalidDigit)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.code, ErrorCode::Empty)
    }

    #[inline]
    pub const fn is_empty_mantissa(&self) -> bool {
        matches!(self.code, ErrorCode::EmptyMantissa)
    }

    #[inline]
    pub const fn is_empty_exponent(&self) -> bool {
        matches!(self.code, ErrorCode::EmptyExponent)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Result of a partial parse: the value and the number of bytes consumed.
pub type PartialResult<T> = core::result::Result<(T, usize), Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_accessors() {
        let err = Error::new(ErrorCode::Overflow, 3);
        assert_eq!(err.code(), ErrorCode::Overflow);
        assert_eq!(err.index(), 3);
        assert!(err.is_overflow());
        assert!(!err.is_invalid_digit());
    }

    #[test]
    fn test_error_display() {
        let err = Error::new(ErrorCode::InvalidDigit, 1);
        assert_eq!(err.to_string(), "InvalidDigit at byte 1");
    }
}
