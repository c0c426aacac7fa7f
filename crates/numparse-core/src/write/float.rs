//! Float formatting: shortest digit string that parses back to the same
//! value, rendered in positional or scientific notation.
//!
//! Digit generation is big-integer based. The value and the half-ulp
//! margins to its neighbors are kept as exact rationals; digits are
//! emitted until the printed prefix lands strictly inside the rounding
//! interval, which is what makes the output both shortest and
//! round-trippable under any radix.

use core::cmp::Ordering;

use crate::float::bignum::{self, Bignum};
use crate::num::Float;
use crate::options::WriteFloatOptions;
use crate::write::{integer, DIGIT_TABLE};

/// Largest positional exponent before switching to scientific notation.
const MAX_POSITIONAL_EXPONENT: i32 = 15;
/// Smallest positional exponent before switching to scientific notation.
const MIN_POSITIONAL_EXPONENT: i32 = -4;

fn pow2(exp: u32) -> Bignum {
    let mut n = Bignum::from_u64(1);
    n.shl(exp);
    n
}

/// Shortest digits of a finite nonzero magnitude under `radix`.
///
/// Returns `(digits, k)` with the value equal to `0.D1 D2 ...` times
/// `radix^k`, digit values most significant first, no leading or
/// trailing zeros.
fn shortest_digits<F: Float>(value: F, radix: u32) -> (Vec<u32>, i32) {
    let (f, e) = value.decompose();
    let boundary = 1u64 << F::MANTISSA_BITS;
    // An even significand owns its interval endpoints: the neighbor at
    // the exact boundary would round away from it under ties-to-even.
    let even = f & 1 == 0;

    // value = num / den, with m± / den the distances to the midpoints of
    // the neighboring floats. The margins differ by a factor of two just
    // above a power of two, where the gap below is half the gap above.
    let mut num;
    let mut den;
    let mut m_plus;
    let mut m_minus;
    if e >= 0 {
        let unit = pow2(e as u32);
        if f != boundary {
            num = Bignum::from_u64(f);
            num.shl(e as u32 + 1);
            den = Bignum::from_u64(2);
            m_plus = unit.clone();
            m_minus = unit;
        } else {
            num = Bignum::from_u64(f);
            num.shl(e as u32 + 2);
            den = Bignum::from_u64(4);
            m_plus = pow2(e as u32 + 1);
            m_minus = unit;
        }
    } else if f != boundary || e == F::DENORMAL_EXPONENT {
        num = Bignum::from_u64(f << 1);
        den = pow2((1 - e) as u32);
        m_plus = Bignum::from_u64(1);
        m_minus = Bignum::from_u64(1);
    } else {
        num = Bignum::from_u64(f << 2);
        den = pow2((2 - e) as u32);
        m_plus = Bignum::from_u64(2);
        m_minus = Bignum::from_u64(1);
    }

    // Scale so the value sits in [1/radix, 1): k is then the position of
    // the radix point relative to the first digit. The float estimate is
    // within one of the true k; the loop below settles it exactly.
    let est = (value.to_f64().log2() / (radix as f64).log2() - 1e-10).ceil() as i32;
    let mut k = est;
    if est >= 0 {
        den.mul_pow(radix, est as u32);
    } else {
        num.mul_pow(radix, (-est) as u32);
        m_plus.mul_pow(radix, (-est) as u32);
        m_minus.mul_pow(radix, (-est) as u32);
    }
    loop {
        let mut hi = num.clone();
        hi.add_assign(&m_plus);
        let over = match hi.cmp_with(&den) {
            Ordering::Greater => true,
            Ordering::Equal => even,
            Ordering::Less => false,
        };
        if over {
            den.mul_small(radix);
            k += 1;
            continue;
        }
        // A first digit of zero means the estimate was one too high.
        hi.mul_small(radix);
        let under = match hi.cmp_with(&den) {
            Ordering::Less => true,
            Ordering::Equal => !even,
            Ordering::Greater => false,
        };
        if under {
            num.mul_small(radix);
            m_plus.mul_small(radix);
            m_minus.mul_small(radix);
            k -= 1;
            continue;
        }
        break;
    }

    let mut digits = Vec::with_capacity(F::SIGNIFICAND_BITS as usize);
    loop {
        num.mul_small(radix);
        m_plus.mul_small(radix);
        m_minus.mul_small(radix);
        let (d, rem) = bignum::div_rem(&num, &den);
        num = rem;
        let d = d as u32;

        let low = match num.cmp_with(&m_minus) {
            Ordering::Less => true,
            Ordering::Equal => even,
            Ordering::Greater => false,
        };
        let mut hi = num.clone();
        hi.add_assign(&m_plus);
        let high = match hi.cmp_with(&den) {
            Ordering::Greater => true,
            Ordering::Equal => even,
            Ordering::Less => false,
        };
        if !low && !high {
            digits.push(d);
            continue;
        }
        // Stopping digit. When both margins are reached, pick the side
        // the exact remainder is closer to.
        let last = if low && high {
            let mut doubled = num;
            doubled.shl(1);
            if doubled.cmp_with(&den) == Ordering::Greater { d + 1 } else { d }
        } else if low {
            d
        } else {
            d + 1
        };
        digits.push(last);
        break;
    }

    // The final increment may overflow the digit; carry it leftward.
    while let Some(&last) = digits.last() {
        if last < radix {
            break;
        }
        digits.pop();
        match digits.last_mut() {
            Some(prev) => *prev += 1,
            None => {
                digits.push(1);
                k += 1;
            }
        }
    }
    (digits, k)
}

fn push_digits(out: &mut Vec<u8>, digits: &[u32]) {
    out.extend(digits.iter().map(|&d| DIGIT_TABLE[d as usize]));
}

fn render_positional(out: &mut Vec<u8>, digits: &[u32], k: i32, options: &WriteFloatOptions) {
    let n = digits.len();
    if k <= 0 {
        out.extend_from_slice(b"0.");
        out.resize(out.len() + (-k) as usize, b'0');
        push_digits(out, digits);
    } else if k as usize >= n {
        push_digits(out, digits);
        out.resize(out.len() + (k as usize - n), b'0');
        if !options.trim_floats() {
            out.extend_from_slice(b".0");
        }
    } else {
        push_digits(out, &digits[..k as usize]);
        out.push(b'.');
        push_digits(out, &digits[k as usize..]);
    }
}

fn render_scientific(out: &mut Vec<u8>, digits: &[u32], k: i32, options: &WriteFloatOptions) {
    push_digits(out, &digits[..1]);
    if digits.len() > 1 {
        out.push(b'.');
        push_digits(out, &digits[1..]);
    }
    out.push(options.exponent_char());
    let exp = k - 1;
    if exp < 0 {
        out.push(b'-');
    }
    // Exponent digits in the same radix as the mantissa.
    let mut scratch = [0u8; 64];
    let pos = integer::write_magnitude(exp.unsigned_abs() as u64, options.radix(), &mut scratch);
    out.extend_from_slice(&scratch[pos..]);
}

fn format<F: Float>(value: F, options: &WriteFloatOptions) -> Vec<u8> {
    let mut out = Vec::with_capacity(32);
    if value.is_nan() {
        out.extend_from_slice(options.nan_string());
        return out;
    }
    if value.is_sign_negative() {
        out.push(b'-');
    }
    if value.is_infinite() {
        out.extend_from_slice(options.inf_string());
        return out;
    }
    if value.abs() == F::ZERO {
        if options.trim_floats() {
            out.push(b'0');
        } else {
            out.extend_from_slice(b"0.0");
        }
        return out;
    }
    let (digits, k) = shortest_digits(value.abs(), options.radix());
    if k - 1 < MIN_POSITIONAL_EXPONENT || k - 1 > MAX_POSITIONAL_EXPONENT {
        render_scientific(&mut out, &digits, k, options);
    } else {
        render_positional(&mut out, &digits, k, options);
    }
    out
}

/// Format `value` into the front of `buffer` and return the written
/// sub-slice. Panics if `buffer` is shorter than the formatted value;
/// `FORMATTED_SIZE` bytes always suffice.
pub(crate) fn write<'a, F: Float>(
    value: F,
    options: &WriteFloatOptions,
    buffer: &'a mut [u8],
) -> &'a mut [u8] {
    let formatted = format(value, options);
    let out = &mut buffer[..formatted.len()];
    out.copy_from_slice(&formatted);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::BUFFER_SIZE;

    fn to_string_with(value: f64, options: &WriteFloatOptions) -> String {
        let mut buffer = [0u8; BUFFER_SIZE];
        String::from_utf8_lossy(write(value, options, &mut buffer)).into_owned()
    }

    fn to_string(value: f64) -> String {
        to_string_with(value, &WriteFloatOptions::decimal())
    }

    #[test]
    fn test_write_positional() {
        assert_eq!(to_string(0.0), "0.0");
        assert_eq!(to_string(1.0), "1.0");
        assert_eq!(to_string(10.0), "10.0");
        assert_eq!(to_string(10.5), "10.5");
        assert_eq!(to_string(-4.02), "-4.02");
        assert_eq!(to_string(0.1), "0.1");
        assert_eq!(to_string(0.3), "0.3");
        assert_eq!(to_string(0.0001), "0.0001");
        assert_eq!(to_string(3.14159), "3.14159");
        assert_eq!(to_string(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(to_string(1e15), "1000000000000000.0");
    }

    #[test]
    fn test_write_scientific() {
        assert_eq!(to_string(1e30), "1e30");
        assert_eq!(to_string(1e16), "1e16");
        assert_eq!(to_string(1e-5), "1e-5");
        assert_eq!(to_string(1e-7), "1e-7");
        assert_eq!(to_string(1.5e300), "1.5e300");
        assert_eq!(to_string(-2.5e-10), "-2.5e-10");
    }

    #[test]
    fn test_write_extremes() {
        assert_eq!(to_string(f64::MAX), "1.7976931348623157e308");
        assert_eq!(to_string(f64::MIN_POSITIVE), "2.2250738585072014e-308");
        assert_eq!(to_string(5e-324), "5e-324");
    }

    #[test]
    fn test_write_specials() {
        assert_eq!(to_string(f64::NAN), "NaN");
        assert_eq!(to_string(f64::INFINITY), "inf");
        assert_eq!(to_string(f64::NEG_INFINITY), "-inf");
        let options = WriteFloatOptions::builder()
            .nan_string(b"nan")
            .inf_string(b"Infinity")
            .build()
            .unwrap();
        assert_eq!(to_string_with(f64::NAN, &options), "nan");
        assert_eq!(to_string_with(f64::NEG_INFINITY, &options), "-Infinity");
    }

    #[test]
    fn test_write_negative_zero() {
        assert_eq!(to_string(-0.0), "-0.0");
        let trimmed = WriteFloatOptions::builder().trim_floats(true).build().unwrap();
        assert_eq!(to_string_with(-0.0, &trimmed), "-0");
    }

    #[test]
    fn test_write_trim_floats() {
        let options = WriteFloatOptions::builder().trim_floats(true).build().unwrap();
        assert_eq!(to_string_with(0.0, &options), "0");
        assert_eq!(to_string_with(10.0, &options), "10");
        assert_eq!(to_string_with(10.5, &options), "10.5");
        assert_eq!(to_string_with(1e15, &options), "1000000000000000");
    }

    #[test]
    fn test_write_radix() {
        let binary = WriteFloatOptions::binary();
        assert_eq!(to_string_with(1.5, &binary), "1.1");
        assert_eq!(to_string_with(3.0, &binary), "11.0");
        // Exponent digits share the mantissa radix.
        assert_eq!(to_string_with((2f64).powi(-30), &binary), "1e-11110");
        let hex = WriteFloatOptions::hexadecimal();
        assert_eq!(to_string_with(255.5, &hex), "FF.8");
        assert_eq!(to_string_with(1.0, &hex), "1.0");
    }

    #[test]
    fn test_write_f32() {
        let options = WriteFloatOptions::decimal();
        let mut buffer = [0u8; BUFFER_SIZE];
        assert_eq!(write(1.25f32, &options, &mut buffer), b"1.25");
        assert_eq!(write(f32::MAX, &options, &mut buffer), b"3.4028235e38");
        assert_eq!(write(f32::from_bits(1), &options, &mut buffer), b"1e-45");
    }

    #[test]
    fn test_write_shortest_round_trip() {
        // The digit string must be minimal yet reparse to the same bits.
        let values = [
            0.1f64,
            2.0 / 3.0,
            1.2345678901234567e-150,
            9007199254740993.0,
            f64::MAX,
            5e-324,
        ];
        let options = WriteFloatOptions::decimal();
        let mut buffer = [0u8; BUFFER_SIZE];
        for value in values {
            let text = core::str::from_utf8(write(value, &options, &mut buffer))
                .unwrap()
                .to_owned();
            let reparsed: f64 = text.parse().unwrap();
            assert_eq!(reparsed.to_bits(), value.to_bits(), "{text}");
        }
    }

    #[test]
    #[should_panic]
    fn test_write_undersized_buffer() {
        let options = WriteFloatOptions::decimal();
        let mut buffer = [0u8; 2];
        write(10.5f64, &options, &mut buffer);
    }
}
