//! Float parsing: grammar walk over sign, special values, mantissa, and
//! exponent, then conversion of the exact digit string.

use crate::error::{Error, ErrorCode, PartialResult, Result};
use crate::float::convert::{self, MAX_DIGITS};
use crate::float::rounding::MagnitudeRounding;
use crate::num::Float;
use crate::options::ParseFloatOptions;
use crate::parse::shared::{self, SeparatorRules, Sign};

/// Significant mantissa digits, leading zeros skipped and the tail capped.
/// Dropped tail digits only shift the exponent and set a sticky flag.
#[derive(Default)]
struct DigitBuffer {
    digits: Vec<u32>,
    dropped: usize,
    truncated: bool,
}

impl DigitBuffer {
    fn push(&mut self, d: u32) {
        if self.digits.is_empty() && d == 0 {
            return;
        }
        if self.digits.len() < MAX_DIGITS {
            self.digits.push(d);
        } else {
            self.dropped += 1;
            if d != 0 {
                self.truncated = true;
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Special {
    Nan,
    Inf,
}

/// Match one special-value spelling at the start of `bytes`, optionally
/// skipping digit separators inside the token.
fn match_spelling(
    bytes: &[u8],
    spelling: &[u8],
    case_sensitive: bool,
    separator: u8,
) -> Option<usize> {
    let mut i = 0;
    for &expected in spelling {
        while separator != 0 && bytes.get(i) == Some(&separator) {
            i += 1;
        }
        let byte = *bytes.get(i)?;
        let matches = if case_sensitive {
            byte == expected
        } else {
            byte.eq_ignore_ascii_case(&expected)
        };
        if !matches {
            return None;
        }
        i += 1;
    }
    Some(i)
}

fn match_special(bytes: &[u8], options: &ParseFloatOptions) -> Option<(Special, usize)> {
    let format = options.format();
    let case_sensitive = format.case_sensitive_special();
    let separator = if format.special_digit_separator() {
        format.digit_separator()
    } else {
        0
    };
    // Longest spelling first so "infinity" is not cut short at "inf".
    if let Some(n) = match_spelling(bytes, options.infinity_string(), case_sensitive, separator) {
        return Some((Special::Inf, n));
    }
    if let Some(n) = match_spelling(bytes, options.inf_string(), case_sensitive, separator) {
        return Some((Special::Inf, n));
    }
    if let Some(n) = match_spelling(bytes, options.nan_string(), case_sensitive, separator) {
        return Some((Special::Nan, n));
    }
    None
}

/// Parse a prefix of `bytes` as a float. Returns the value and the number
/// of bytes consumed.
pub(crate) fn parse_partial<F: Float>(
    bytes: &[u8],
    options: &ParseFloatOptions,
) -> PartialResult<F> {
    if bytes.is_empty() {
        return Err(Error::new(ErrorCode::Empty, 0));
    }
    let format = options.format();
    let radix = options.radix();
    let (sign, sign_len) = shared::scan_sign(bytes);
    let negative = sign.sign == Sign::Negative;
    if sign_len == bytes.len() {
        return Err(Error::new(ErrorCode::Empty, sign_len));
    }

    if !format.no_special() {
        if let Some((kind, matched)) = match_special(&bytes[sign_len..], options) {
            shared::validate_sign(sign, format)?;
            let magnitude = match kind {
                Special::Nan => F::NAN,
                Special::Inf => F::INFINITY,
            };
            let value = if negative { magnitude.neg() } else { magnitude };
            return Ok((value, sign_len + matched));
        }
    }

    // Mantissa: integer digits, optional point, fraction digits.
    let mut buf = DigitBuffer::default();
    let int_run = shared::scan_digits(bytes, sign_len, radix, SeparatorRules::integer(format), |d, _| {
        buf.push(d);
        Ok(())
    })?;
    let mut index = int_run.end;
    let mut saw_point = false;
    let mut point_index = 0;
    let mut frac_digits = 0usize;
    if bytes.get(index) == Some(&b'.') {
        saw_point = true;
        point_index = index;
        let frac_run =
            shared::scan_digits(bytes, index + 1, radix, SeparatorRules::fraction(format), |d, _| {
                buf.push(d);
                Ok(())
            })?;
        frac_digits = frac_run.digits;
        index = frac_run.end;
    }

    if int_run.digits + frac_digits == 0 {
        let separator = format.digit_separator();
        if separator != 0 && bytes.get(index) == Some(&separator) {
            return Err(Error::new(ErrorCode::InvalidDigit, index));
        }
        return Err(Error::new(ErrorCode::EmptyMantissa, sign_len));
    }
    if format.required_integer_digits() && int_run.digits == 0 {
        return Err(Error::new(ErrorCode::EmptyInteger, sign_len));
    }
    if saw_point && format.required_fraction_digits() && frac_digits == 0 {
        return Err(Error::new(ErrorCode::EmptyFraction, point_index + 1));
    }
    if format.no_float_leading_zeros() {
        shared::check_leading_zeros(bytes, &int_run)?;
    }

    // Exponent.
    let mut exponent = 0i64;
    if index < bytes.len() && bytes[index].eq_ignore_ascii_case(&options.exponent_char()) {
        let marker = index;
        if format.no_exponent_notation() {
            return Err(Error::new(ErrorCode::InvalidExponent, marker));
        }
        if format.no_exponent_without_fraction() && !saw_point {
            return Err(Error::new(ErrorCode::ExponentWithoutFraction, marker));
        }
        index += 1;
        let mut exp_negative = false;
        let mut exp_sign_explicit = false;
        let mut exp_sign_positive = false;
        match bytes.get(index) {
            Some(b'+') => {
                exp_sign_explicit = true;
                exp_sign_positive = true;
                index += 1;
            }
            Some(b'-') => {
                exp_sign_explicit = true;
                exp_negative = true;
                index += 1;
            }
            _ => {}
        }
        if exp_sign_positive && format.no_positive_exponent_sign() {
            return Err(Error::new(ErrorCode::InvalidPositiveExponentSign, marker + 1));
        }
        if !exp_sign_explicit && format.required_exponent_sign() {
            return Err(Error::new(ErrorCode::MissingExponentSign, marker + 1));
        }
        let mut exp_value = 0i64;
        let exp_run =
            shared::scan_digits(bytes, index, radix, SeparatorRules::exponent(format), |d, _| {
                exp_value = exp_value.saturating_mul(radix as i64).saturating_add(d as i64);
                Ok(())
            })?;
        if exp_run.digits == 0 && format.required_exponent_digits() {
            // With an explicit sign the error points at the sign itself,
            // otherwise at the byte after the marker.
            let at = if exp_sign_explicit { marker + 1 } else { index };
            return Err(Error::new(ErrorCode::EmptyExponent, at));
        }
        index = exp_run.end;
        exponent = if exp_negative { -exp_value } else { exp_value };
    }

    shared::validate_sign(sign, format)?;

    // Tail digits dropped past the cap shift the weight of the kept
    // prefix up; fraction digits shift it down.
    let adjusted = exponent
        .saturating_add(buf.dropped as i64)
        .saturating_sub(frac_digits as i64);
    let mode = MagnitudeRounding::resolve(options.rounding(), negative);
    let magnitude: F = convert::digits_to_float(
        &buf.digits,
        adjusted,
        radix,
        mode,
        buf.truncated,
        options.lossy(),
    );
    let value = if negative { magnitude.neg() } else { magnitude };
    Ok((value, index))
}

/// Parse all of `bytes` as a float; trailing bytes are an error.
pub(crate) fn parse_complete<F: Float>(bytes: &[u8], options: &ParseFloatOptions) -> Result<F> {
    let (value, consumed) = parse_partial(bytes, options)?;
    if consumed != bytes.len() {
        return Err(Error::new(ErrorCode::InvalidDigit, consumed));
    }
    Ok(value)
}
