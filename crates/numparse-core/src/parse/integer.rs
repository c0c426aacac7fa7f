//! Integer parsing: sign, digit run, checked accumulation.

use crate::error::{Error, ErrorCode, PartialResult, Result};
use crate::num::Integer;
use crate::options::ParseIntegerOptions;
use crate::parse::shared::{self, SeparatorRules, Sign};

/// Parse a prefix of `bytes` as an integer. Returns the value and the
/// number of bytes consumed.
pub(crate) fn parse_partial<T: Integer>(
    bytes: &[u8],
    options: &ParseIntegerOptions,
) -> PartialResult<T> {
    if bytes.is_empty() {
        return Err(Error::new(ErrorCode::Empty, 0));
    }
    let (sign, sign_len) = shared::scan_sign(bytes);
    if sign.sign == Sign::Negative && !T::IS_SIGNED {
        return Err(Error::new(ErrorCode::InvalidDigit, 0));
    }

    let radix = options.radix();
    let format = options.format();
    let rules = SeparatorRules::integer(format);
    let negative = sign.sign == Sign::Negative;
    let mut value = T::ZERO;
    let run = shared::scan_digits(bytes, sign_len, radix, rules, |d, index| {
        // Accumulate toward MIN for negative values so i64::MIN parses.
        let next = value
            .checked_mul_small(radix)
            .and_then(|v| {
                if negative {
                    v.checked_sub_small(d)
                } else {
                    v.checked_add_small(d)
                }
            });
        match next {
            Some(v) => {
                value = v;
                Ok(())
            }
            None => {
                let code = if negative { ErrorCode::Underflow } else { ErrorCode::Overflow };
                Err(Error::new(code, index))
            }
        }
    })?;

    if run.digits == 0 {
        if bytes.get(run.end).copied() == Some(rules.separator) && rules.separator != 0 {
            return Err(Error::new(ErrorCode::InvalidDigit, run.end));
        }
        return Err(Error::new(ErrorCode::Empty, sign_len));
    }
    if format.no_integer_leading_zeros() {
        shared::check_leading_zeros(bytes, &run)?;
    }
    shared::validate_sign(sign, format)?;
    Ok((value, run.end))
}

/// Parse all of `bytes` as an integer; trailing bytes are an error.
pub(crate) fn parse_complete<T: Integer>(
    bytes: &[u8],
    options: &ParseIntegerOptions,
) -> Result<T> {
    let (value, consumed) = parse_partial(bytes, options)?;
    if consumed != bytes.len() {
        return Err(Error::new(ErrorCode::InvalidDigit, consumed));
    }
    Ok(value)
}
