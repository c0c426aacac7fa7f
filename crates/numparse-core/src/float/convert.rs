//! Conversion from an exact digit string to a correctly rounded float.
//!
//! The value is `digits * radix^exponent` with `digits` most significant
//! first. Three paths: an exact native fast path for small decimal inputs,
//! a lossy single-multiply approximation when the caller opted out of
//! correct rounding, and an exact big-integer division otherwise.

use crate::float::bignum::{self, Bignum};
use crate::float::rounding::{self, MagnitudeRounding};
use crate::num::Float;

/// Digits kept before truncation. Enough that dropped digits can only
/// matter as a sticky bit: even for radix 2 the significand plus the full
/// subnormal range is under 1130 digits.
pub(crate) const MAX_DIGITS: usize = 1200;

/// Convert to the magnitude of the nearest representable float under
/// `mode`. The caller applies the sign. `digits` must have no leading
/// zeros; `truncated` means nonzero digits beyond `digits` were dropped.
pub(crate) fn digits_to_float<F: Float>(
    digits: &[u32],
    exponent: i64,
    radix: u32,
    mode: MagnitudeRounding,
    truncated: bool,
    lossy: bool,
) -> F {
    if digits.is_empty() {
        return F::ZERO;
    }
    if lossy {
        return lossy_path(digits, exponent, radix);
    }
    if radix == 10 && !truncated && mode == MagnitudeRounding::NearestEven {
        if let Some(value) = decimal_fast_path(digits, exponent) {
            return value;
        }
    }
    exact_path(digits, exponent, radix, mode, truncated)
}

fn decimal_fast_path<F: Float>(digits: &[u32], exponent: i64) -> Option<F> {
    // The mantissa must accumulate without rounding; 19 digits always fit
    // a u64, the representability bound is checked by fast_path itself.
    if digits.len() > 19 {
        return None;
    }
    let mut mantissa = 0u64;
    for &d in digits {
        mantissa = mantissa.checked_mul(10)?.checked_add(d as u64)?;
    }
    let exponent = i32::try_from(exponent).ok()?;
    F::fast_path(mantissa, exponent)
}

fn lossy_path<F: Float>(digits: &[u32], exponent: i64, radix: u32) -> F {
    let keep = digits.len().min(26);
    let mut mantissa = 0f64;
    for &d in &digits[..keep] {
        mantissa = mantissa * radix as f64 + d as f64;
    }
    let adjusted = exponent + (digits.len() - keep) as i64;
    let clamped = adjusted.clamp(-100_000, 100_000) as i32;
    F::from_f64(mantissa * (radix as f64).powi(clamped))
}

fn overflow_value<F: Float>(mode: MagnitudeRounding) -> F {
    match mode {
        MagnitudeRounding::Down => F::max_finite(),
        _ => F::INFINITY,
    }
}

fn underflow_value<F: Float>(mode: MagnitudeRounding) -> F {
    match mode {
        MagnitudeRounding::Up => F::min_positive_subnormal(),
        _ => F::ZERO,
    }
}

fn exact_path<F: Float>(
    digits: &[u32],
    exponent: i64,
    radix: u32,
    mode: MagnitudeRounding,
    sticky: bool,
) -> F {
    let p = F::SIGNIFICAND_BITS as i32;
    let log2_radix = (radix as f64).log2();

    // Order-of-magnitude clamp. The value lies in
    // [radix^(exponent+n-1), radix^(exponent+n)); anything far outside the
    // representable range is settled here, which also bounds the size of
    // the big integers below.
    let magnitude = exponent + digits.len() as i64;
    if (magnitude as f64) * log2_radix < (F::DENORMAL_EXPONENT - 2) as f64 {
        return underflow_value(mode);
    }
    if ((magnitude - 1) as f64) * log2_radix > (F::MAX_EXPONENT + p) as f64 {
        return overflow_value(mode);
    }

    // value = num / den, exactly.
    let mut num = Bignum::from_digits(digits, radix);
    let mut den = Bignum::from_u64(1);
    if exponent >= 0 {
        num.mul_pow(radix, exponent as u32);
    } else {
        den.mul_pow(radix, (-exponent) as u32);
    }

    // Scale so the quotient carries the full significand width.
    let nb = num.bit_length() as i32;
    let db = den.bit_length() as i32;
    let shift = p + db - nb;
    let mut scaled_num = num.clone();
    let mut scaled_den = den.clone();
    if shift > 0 {
        scaled_num.shl(shift as u32);
    } else if shift < 0 {
        scaled_den.shl((-shift) as u32);
    }
    let mut exp2 = -shift;
    let (mut q, mut rem) = bignum::div_rem(&scaled_num, &scaled_den);
    if q >= 1u64 << p {
        // One bit over; fold the dropped bit into the remainder.
        if q & 1 == 1 {
            rem.add_assign(&scaled_den);
        }
        scaled_den.shl(1);
        q >>= 1;
        exp2 += 1;
    }

    if exp2 < F::DENORMAL_EXPONENT {
        // Subnormal: redo the division at the fixed minimum exponent,
        // where the quotient has fewer than `p` bits.
        num.shl((-F::DENORMAL_EXPONENT) as u32);
        let (sq, srem) = bignum::div_rem(&num, &den);
        let up = rounding::rounds_up(mode, sq, &srem, &den, sticky);
        let mut m = sq + up as u64;
        let mut exp2 = F::DENORMAL_EXPONENT;
        if m == 1u64 << p {
            m >>= 1;
            exp2 += 1;
        }
        return F::compose(m, exp2);
    }

    let up = rounding::rounds_up(mode, q, &rem, &scaled_den, sticky);
    let mut m = q + up as u64;
    if m == 1u64 << p {
        m >>= 1;
        exp2 += 1;
    }
    if exp2 > F::MAX_EXPONENT {
        return overflow_value(mode);
    }
    F::compose(m, exp2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact_f64(digits: &[u32], exponent: i64, radix: u32, mode: MagnitudeRounding) -> f64 {
        digits_to_float(digits, exponent, radix, mode, false, false)
    }

    fn nearest_f64(digits: &[u32], exponent: i64) -> f64 {
        exact_f64(digits, exponent, 10, MagnitudeRounding::NearestEven)
    }

    #[test]
    fn test_decimal_basics() {
        assert_eq!(nearest_f64(&[1], 0), 1.0);
        assert_eq!(nearest_f64(&[1, 0, 5], -1), 10.5);
        assert_eq!(nearest_f64(&[1], -1), 0.1);
        assert_eq!(nearest_f64(&[1], 308), 1e308);
        assert_eq!(nearest_f64(&[1], -308), 1e-308);
    }

    #[test]
    fn test_slow_path_matches_std() {
        // 17 significant digits force the exact path.
        let digits = [5, 0, 0, 2, 8, 6, 8, 1, 4, 8, 3, 9, 6, 3, 7, 4];
        assert_eq!(nearest_f64(&digits, -15), 5.002868148396374);
        let digits = [2, 2, 2, 5, 0, 7, 3, 8, 5, 8, 5, 0, 7, 2, 0, 1, 4];
        assert_eq!(nearest_f64(&digits, -324), 2.2250738585072014e-308);
    }

    #[test]
    fn test_subnormals() {
        assert_eq!(nearest_f64(&[5], -324), 5e-324);
        assert_eq!(nearest_f64(&[1], -323), 1e-323);
        // Half the smallest subnormal rounds to zero on the even side.
        let half = nearest_f64(&[2, 4, 7, 0, 3, 2, 8], -330);
        assert_eq!(half, 0.0);
    }

    #[test]
    fn test_overflow_and_underflow_saturation() {
        assert_eq!(nearest_f64(&[1], 400), f64::INFINITY);
        assert_eq!(nearest_f64(&[1], -400), 0.0);
        assert_eq!(
            exact_f64(&[1], 400, 10, MagnitudeRounding::Down),
            f64::MAX
        );
        assert_eq!(
            exact_f64(&[1], -400, 10, MagnitudeRounding::Up),
            f64::from_bits(1)
        );
        assert_eq!(nearest_f64(&[2], 200_000_000), f64::INFINITY);
    }

    #[test]
    fn test_directed_rounding() {
        // 0.1 is not representable; nearest rounds up, truncation stays
        // one ulp below.
        let nearest = nearest_f64(&[1], -1);
        let down = exact_f64(&[1], -1, 10, MagnitudeRounding::Down);
        let up = exact_f64(&[1], -1, 10, MagnitudeRounding::Up);
        assert_eq!(nearest, 0.1);
        assert_eq!(down.to_bits(), nearest.to_bits() - 1);
        assert_eq!(up, nearest);
    }

    #[test]
    fn test_tie_to_even() {
        // 1 + 2^-53 is exactly halfway between 1.0 and the next float.
        // Its decimal expansion is 1.00000000000000011102230246251565404236316680908203125.
        let digits: Vec<u32> = "100000000000000011102230246251565404236316680908203125"
            .bytes()
            .map(|b| (b - b'0') as u32)
            .collect();
        assert_eq!(nearest_f64(&digits, -(digits.len() as i64 - 1)), 1.0);
        let away: f64 = digits_to_float(
            &digits,
            -(digits.len() as i64 - 1),
            10,
            MagnitudeRounding::NearestAway,
            false,
            false,
        );
        assert_eq!(away.to_bits(), 1.0f64.to_bits() + 1);
    }

    #[test]
    fn test_other_radices() {
        // Binary 1.1 = 1.5.
        assert_eq!(exact_f64(&[1, 1], -1, 2, MagnitudeRounding::NearestEven), 1.5);
        // Hex ff.8 = 255.5.
        assert_eq!(
            exact_f64(&[15, 15, 8], -1, 16, MagnitudeRounding::NearestEven),
            255.5
        );
        // Base 36: zz = 1295.
        assert_eq!(exact_f64(&[35, 35], 0, 36, MagnitudeRounding::NearestEven), 1295.0);
    }

    #[test]
    fn test_f32_conversion() {
        let value: f32 =
            digits_to_float(&[1], 0, 10, MagnitudeRounding::NearestEven, false, false);
        assert_eq!(value, 1.0f32);
        let value: f32 =
            digits_to_float(&[1], 39, 10, MagnitudeRounding::NearestEven, false, false);
        assert_eq!(value, f32::INFINITY);
        let value: f32 =
            digits_to_float(&[1], -46, 10, MagnitudeRounding::NearestEven, false, false);
        assert_eq!(value, 0.0f32);
        // Smallest f32 subnormal is about 1.4e-45.
        let value: f32 =
            digits_to_float(&[1, 4], -46, 10, MagnitudeRounding::NearestEven, false, false);
        assert_eq!(value, f32::from_bits(1));
    }

    #[test]
    fn test_lossy_close() {
        let value: f64 = digits_to_float(&[1, 0, 5], -1, 10, MagnitudeRounding::NearestEven, false, true);
        assert!((value - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_sticky_truncation() {
        // 1.0...(many zeros)...1 truncated after the zeros: the dropped
        // nonzero digit must push the tie upward.
        let mut digits = vec![1u32];
        digits.extend(std::iter::repeat(0).take(52));
        // Exactly 1.0 when the dropped digits are ignored, but sticky
        // forces the value strictly above 1.0; nearest stays at 1.0
        // while directed-up must move off it.
        let up: f64 = digits_to_float(
            &digits,
            -(digits.len() as i64 - 1),
            10,
            MagnitudeRounding::Up,
            true,
            false,
        );
        assert_eq!(up.to_bits(), 1.0f64.to_bits() + 1);
        let nearest: f64 = digits_to_float(
            &digits,
            -(digits.len() as i64 - 1),
            10,
            MagnitudeRounding::NearestEven,
            true,
            false,
        );
        assert_eq!(nearest, 1.0);
    }
}
