//! # numparse-core
//!
//! Correctly rounded conversion between numbers and byte strings.
//!
//! Parsing and formatting cover the ten primitive integer types and both
//! binary floats, any radix from 2 to 36, and a configurable grammar: digit
//! separators, required or forbidden components, and sign policy are all
//! expressed through [`NumberFormat`], with per-language presets matching
//! the number literals of common languages and data formats. Float parsing
//! is correctly rounded under five rounding modes; float formatting emits
//! the shortest digit string that parses back to the same value.
//!
//! ```
//! let value: f64 = numparse_core::parse(b"1.2345e10")?;
//! assert_eq!(value, 1.2345e10);
//!
//! let mut buffer = [0u8; numparse_core::BUFFER_SIZE];
//! assert_eq!(numparse_core::write(value, &mut buffer), b"12345000000.0");
//! # Ok::<(), numparse_core::Error>(())
//! ```

#![deny(unsafe_code)]

mod error;
mod float;
mod num;
mod parse;
mod write;

pub mod format;
pub mod options;

pub use error::{Error, ErrorCode, PartialResult, Result};
pub use format::{NumberFormat, NumberFormatBuilder};
pub use num::{FormattedSize, BUFFER_SIZE};
pub use options::{
    ParseFloatOptions, ParseIntegerOptions, RoundingKind, WriteFloatOptions, WriteIntegerOptions,
};

/// A type parseable from a byte string.
///
/// Implemented for the primitive integers and floats; the associated
/// options type selects the integer or float configuration surface.
pub trait ParseNumber: Sized {
    type Options: Default;

    /// Parse the entire byte string, rejecting trailing input.
    fn parse_complete(bytes: &[u8], options: &Self::Options) -> Result<Self>;
    /// Parse the longest valid prefix, returning the value and the number
    /// of bytes consumed.
    fn parse_partial(bytes: &[u8], options: &Self::Options) -> PartialResult<Self>;
}

/// A type formattable into a byte buffer.
pub trait WriteNumber: FormattedSize {
    type Options: Default;

    /// Format into the front of `buffer` and return the written
    /// sub-slice. Panics if the buffer is shorter than the formatted
    /// value; [`FormattedSize::FORMATTED_SIZE`] bytes always suffice.
    fn write_bytes<'a>(self, options: &Self::Options, buffer: &'a mut [u8]) -> &'a mut [u8];
}

macro_rules! integer_conversions {
    ($($t:ty),*) => {$(
        impl ParseNumber for $t {
            type Options = ParseIntegerOptions;

            #[inline]
            fn parse_complete(bytes: &[u8], options: &Self::Options) -> Result<Self> {
                parse::integer::parse_complete(bytes, options)
            }

            #[inline]
            fn parse_partial(bytes: &[u8], options: &Self::Options) -> PartialResult<Self> {
                parse::integer::parse_partial(bytes, options)
            }
        }

        impl WriteNumber for $t {
            type Options = WriteIntegerOptions;

            #[inline]
            fn write_bytes<'a>(self, options: &Self::Options, buffer: &'a mut [u8]) -> &'a mut [u8] {
                write::integer::write(self, options, buffer)
            }
        }
    )*};
}

macro_rules! float_conversions {
    ($($t:ty),*) => {$(
        impl ParseNumber for $t {
            type Options = ParseFloatOptions;

            #[inline]
            fn parse_complete(bytes: &[u8], options: &Self::Options) -> Result<Self> {
                parse::float::parse_complete(bytes, options)
            }

            #[inline]
            fn parse_partial(bytes: &[u8], options: &Self::Options) -> PartialResult<Self> {
                parse::float::parse_partial(bytes, options)
            }
        }

        impl WriteNumber for $t {
            type Options = WriteFloatOptions;

            #[inline]
            fn write_bytes<'a>(self, options: &Self::Options, buffer: &'a mut [u8]) -> &'a mut [u8] {
                write::float::write(self, options, buffer)
            }
        }
    )*};
}

integer_conversions! { u8, u16, u32, u64, usize, i8, i16, i32, i64, isize }
float_conversions! { f32, f64 }

/// Parse `bytes` completely under default options.
#[inline]
pub fn parse<T: ParseNumber>(bytes: &[u8]) -> Result<T> {
    T::parse_complete(bytes, &T::Options::default())
}

/// Parse `bytes` completely under the given options.
#[inline]
pub fn parse_with_options<T: ParseNumber>(bytes: &[u8], options: &T::Options) -> Result<T> {
    T::parse_complete(bytes, options)
}

/// Parse the longest valid prefix of `bytes` under default options.
#[inline]
pub fn parse_partial<T: ParseNumber>(bytes: &[u8]) -> PartialResult<T> {
    T::parse_partial(bytes, &T::Options::default())
}

/// Parse the longest valid prefix of `bytes` under the given options.
#[inline]
pub fn parse_partial_with_options<T: ParseNumber>(
    bytes: &[u8],
    options: &T::Options,
) -> PartialResult<T> {
    T::parse_partial(bytes, options)
}

/// Format `value` into `buffer` under default options and return the
/// written sub-slice.
#[inline]
pub fn write<T: WriteNumber>(value: T, buffer: &mut [u8]) -> &mut [u8] {
    value.write_bytes(&T::Options::default(), buffer)
}

/// Format `value` into `buffer` under the given options and return the
/// written sub-slice.
#[inline]
pub fn write_with_options<'a, T: WriteNumber>(
    value: T,
    options: &T::Options,
    buffer: &'a mut [u8],
) -> &'a mut [u8] {
    value.write_bytes(options, buffer)
}
