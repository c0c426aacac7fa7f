//! Numeric traits connecting the generic parse and write paths to the
//! twelve supported primitive types.

use core::fmt;

/// Maximum byte length of a formatted value, per type.
///
/// `FORMATTED_SIZE` covers any radix in 2..=36 (radix 2 is the worst case);
/// `FORMATTED_SIZE_DECIMAL` covers radix 10 only. A buffer of the relevant
/// size is always large enough for `write` / `write_with_options`.
pub trait FormattedSize {
    const FORMATTED_SIZE: usize;
    const FORMATTED_SIZE_DECIMAL: usize;
}

/// A buffer of this size fits any formatted value of any supported type.
pub const BUFFER_SIZE: usize = 128;

macro_rules! formatted_size {
    ($($t:ty => ($radix:expr, $decimal:expr),)*) => {$(
        impl FormattedSize for $t {
            const FORMATTED_SIZE: usize = $radix;
            const FORMATTED_SIZE_DECIMAL: usize = $decimal;
        }
    )*};
}

formatted_size! {
    u8 => (8, 3),
    u16 => (16, 5),
    u32 => (32, 10),
    u64 => (64, 20),
    usize => (64, 20),
    i8 => (9, 4),
    i16 => (17, 6),
    i32 => (33, 11),
    i64 => (65, 20),
    isize => (65, 20),
    f32 => (64, 16),
    f64 => (128, 32),
}

/// Primitive integer usable with the parse and write entry points.
pub trait Integer: Copy + Eq + Ord + fmt::Debug + FormattedSize {
    const IS_SIGNED: bool;
    const ZERO: Self;

    /// The digit as a value of this type. `d` must be below the radix.
    fn from_digit(d: u32) -> Self;
    /// `self * radix`, or `None` on wrap.
    fn checked_mul_small(self, radix: u32) -> Option<Self>;
    /// `self + d`, or `None` on wrap. Used when accumulating positive values.
    fn checked_add_small(self, d: u32) -> Option<Self>;
    /// `self - d`, or `None` on wrap. Used when accumulating negative values.
    fn checked_sub_small(self, d: u32) -> Option<Self>;
    /// Absolute value, widened. Every supported magnitude fits in a `u64`.
    fn magnitude(self) -> u64;
    fn is_negative(self) -> bool;
}

macro_rules! unsigned_integer {
    ($($t:ty),*) => {$(
        impl Integer for $t {
            const IS_SIGNED: bool = false;
            const ZERO: Self = 0;

            #[inline]
            fn from_digit(d: u32) -> Self {
                d as Self
            }

            #[inline]
            fn checked_mul_small(self, radix: u32) -> Option<Self> {
                self.checked_mul(radix as Self)
            }

            #[inline]
            fn checked_add_small(self, d: u32) -> Option<Self> {
                self.checked_add(d as Self)
            }

            #[inline]
            fn checked_sub_small(self, d: u32) -> Option<Self> {
                self.checked_sub(d as Self)
            }

            #[inline]
            fn magnitude(self) -> u64 {
                self as u64
            }

            #[inline]
            fn is_negative(self) -> bool {
                false
            }
        }
    )*};
}

macro_rules! signed_integer {
    ($($t:ty),*) => {$(
        impl Integer for $t {
            const IS_SIGNED: bool = true;
            const ZERO: Self = 0;

            #[inline]
            fn from_digit(d: u32) -> Self {
                d as Self
            }

            #[inline]
            fn checked_mul_small(self, radix: u32) -> Option<Self> {
                self.checked_mul(radix as Self)
            }

            #[inline]
            fn checked_add_small(self, d: u32) -> Option<Self> {
                self.checked_add(d as Self)
            }

            #[inline]
            fn checked_sub_small(self, d: u32) -> Option<Self> {
                self.checked_sub(d as Self)
            }

            #[inline]
            fn magnitude(self) -> u64 {
                self.unsigned_abs() as u64
            }

            #[inline]
            fn is_negative(self) -> bool {
                <$t>::is_negative(self)
            }
        }
    )*};
}

unsigned_integer! { u8, u16, u32, u64, usize }
signed_integer! { i8, i16, i32, i64, isize }

/// Primitive binary float usable with the parse and write entry points.
///
/// The raw-layout constants describe the value as `m * 2^e` with `m` an
/// integer significand of up to `SIGNIFICAND_BITS` bits (implicit bit
/// included) and `e` the unbiased power-of-two exponent of that form.
pub trait Float: Copy + PartialEq + PartialOrd + fmt::Debug + FormattedSize {
    /// Significand width including the implicit bit (24 for f32, 53 for f64).
    const SIGNIFICAND_BITS: u32;
    /// Explicit fraction width (23 for f32, 52 for f64).
    const MANTISSA_BITS: u32;
    /// Smallest `e` in the `m * 2^e` form (the subnormal exponent).
    const DENORMAL_EXPONENT: i32;
    /// Largest `e` in the `m * 2^e` form.
    const MAX_EXPONENT: i32;
    /// Bias applied when packing `e` into the exponent field.
    const EXPONENT_BIAS: i32;

    const ZERO: Self;
    const INFINITY: Self;
    const NAN: Self;

    fn from_bits_wide(bits: u64) -> Self;
    fn to_bits_wide(self) -> u64;
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
    fn is_sign_negative(self) -> bool;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn neg(self) -> Self;
    fn abs(self) -> Self;
    fn max_finite() -> Self;
    fn min_positive_subnormal() -> Self;

    /// Exact native-arithmetic conversion of `mantissa * 10^exponent`, when
    /// both the mantissa and the power of ten are exactly representable and
    /// a single hardware rounding therefore gives the correct result.
    /// Returns `None` outside that window. Decimal only.
    fn fast_path(mantissa: u64, exponent: i32) -> Option<Self>;

    /// Decompose a finite nonzero value into `(m, e)` with `value.abs() ==
    /// m * 2^e` and `m` nonzero.
    fn decompose(self) -> (u64, i32) {
        let bits = self.to_bits_wide();
        let mantissa_mask = (1u64 << Self::MANTISSA_BITS) - 1;
        let exponent_mask = (1u64 << (64 - Self::MANTISSA_BITS - 1)) - 1;
        let fraction = bits & mantissa_mask;
        let biased = ((bits >> Self::MANTISSA_BITS) & exponent_mask) as i32;
        if biased == 0 {
            (fraction, Self::DENORMAL_EXPONENT)
        } else {
            (
                fraction | (1u64 << Self::MANTISSA_BITS),
                biased - Self::EXPONENT_BIAS,
            )
        }
    }

    /// Pack `(m, e)` from the `m * 2^e` form back into a float. `m` must be
    /// below `2^SIGNIFICAND_BITS` and `e` within range.
    fn compose(m: u64, e: i32) -> Self {
        let implicit = 1u64 << Self::MANTISSA_BITS;
        if m == 0 {
            return Self::ZERO;
        }
        let bits = if m >= implicit {
            let biased = (e + Self::EXPONENT_BIAS) as u64;
            (biased << Self::MANTISSA_BITS) | (m & (implicit - 1))
        } else {
            // Subnormal: biased exponent field is zero.
            m
        };
        Self::from_bits_wide(bits)
    }
}

impl Float for f32 {
    const SIGNIFICAND_BITS: u32 = 24;
    const MANTISSA_BITS: u32 = 23;
    const DENORMAL_EXPONENT: i32 = -149;
    const MAX_EXPONENT: i32 = 104;
    const EXPONENT_BIAS: i32 = 150;

    const ZERO: Self = 0.0;
    const INFINITY: Self = f32::INFINITY;
    const NAN: Self = f32::NAN;

    #[inline]
    fn from_bits_wide(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }

    #[inline]
    fn to_bits_wide(self) -> u64 {
        self.to_bits() as u64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn is_sign_negative(self) -> bool {
        f32::is_sign_negative(self)
    }

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    #[inline]
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }

    #[inline]
    fn neg(self) -> Self {
        -self
    }

    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }

    #[inline]
    fn max_finite() -> Self {
        f32::MAX
    }

    #[inline]
    fn min_positive_subnormal() -> Self {
        f32::from_bits(1)
    }

    fn fast_path(mantissa: u64, exponent: i32) -> Option<Self> {
        // 10^10 = 5^10 * 2^10 and 5^10 < 2^24, so powers through 10 are
        // exact in an f32.
        const POW10: [f32; 11] = [
            1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10,
        ];
        if mantissa >= 1 << 24 {
            return None;
        }
        let value = mantissa as f32;
        match exponent {
            0 => Some(value),
            1..=10 => Some(value * POW10[exponent as usize]),
            -10..=-1 => Some(value / POW10[-exponent as usize]),
            _ => None,
        }
    }
}

impl Float for f64 {
    const SIGNIFICAND_BITS: u32 = 53;
    const MANTISSA_BITS: u32 = 52;
    const DENORMAL_EXPONENT: i32 = -1074;
    const MAX_EXPONENT: i32 = 971;
    const EXPONENT_BIAS: i32 = 1075;

    const ZERO: Self = 0.0;
    const INFINITY: Self = f64::INFINITY;
    const NAN: Self = f64::NAN;

    #[inline]
    fn from_bits_wide(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    #[inline]
    fn to_bits_wide(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn is_sign_negative(self) -> bool {
        f64::is_sign_negative(self)
    }

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    #[inline]
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }

    #[inline]
    fn neg(self) -> Self {
        -self
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn max_finite() -> Self {
        f64::MAX
    }

    #[inline]
    fn min_positive_subnormal() -> Self {
        f64::from_bits(1)
    }

    fn fast_path(mantissa: u64, exponent: i32) -> Option<Self> {
        // 10^22 = 5^22 * 2^22 and 5^22 < 2^53, so powers through 22 are
        // exact in an f64.
        const POW10: [f64; 23] = [
            1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14,
            1e15, 1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
        ];
        if mantissa >= 1 << 53 {
            return None;
        }
        let value = mantissa as f64;
        match exponent {
            0 => Some(value),
            1..=22 => Some(value * POW10[exponent as usize]),
            -22..=-1 => Some(value / POW10[-exponent as usize]),
            _ => None,
        }
    }
}
