//! Pieces shared by the integer and float parsers: sign handling and
//! digit-run scanning with digit separator placement rules.

use crate::error::{Error, ErrorCode, Result};
use crate::format::NumberFormat;
use crate::options::digit_value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

/// Outcome of scanning a leading sign. `explicit` distinguishes `+1` from
/// `1` so format rules on explicit signs can be checked after the parse.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SignInfo {
    pub sign: Sign,
    pub explicit: bool,
    /// True when the explicit sign was `+`.
    pub positive_explicit: bool,
}

/// Consume an optional leading `+`/`-`. Never fails; format rules on signs
/// are validated by the caller once the parse itself has succeeded, so a
/// syntax error deeper in the input takes precedence.
pub(crate) fn scan_sign(bytes: &[u8]) -> (SignInfo, usize) {
    match bytes.first() {
        Some(b'+') => (
            SignInfo { sign: Sign::Positive, explicit: true, positive_explicit: true },
            1,
        ),
        Some(b'-') => (
            SignInfo { sign: Sign::Negative, explicit: true, positive_explicit: false },
            1,
        ),
        _ => (
            SignInfo { sign: Sign::Positive, explicit: false, positive_explicit: false },
            0,
        ),
    }
}

/// Check mantissa sign rules once the numeric parse has succeeded.
pub(crate) fn validate_sign(info: SignInfo, format: NumberFormat) -> Result<()> {
    if info.positive_explicit && format.no_positive_mantissa_sign() {
        return Err(Error::new(ErrorCode::InvalidPositiveMantissaSign, 0));
    }
    if !info.explicit && format.required_mantissa_sign() {
        return Err(Error::new(ErrorCode::MissingMantissaSign, 0));
    }
    Ok(())
}

/// Digit separator placement rules for one region of the number (integer,
/// fraction, or exponent digits).
#[derive(Clone, Copy, Debug)]
pub(crate) struct SeparatorRules {
    pub separator: u8,
    pub internal: bool,
    pub leading: bool,
    pub trailing: bool,
    pub consecutive: bool,
}

impl SeparatorRules {
    pub fn integer(format: NumberFormat) -> Self {
        Self {
            separator: format.digit_separator(),
            internal: format.integer_internal_digit_separator(),
            leading: format.integer_leading_digit_separator(),
            trailing: format.integer_trailing_digit_separator(),
            consecutive: format.integer_consecutive_digit_separator(),
        }
    }

    pub fn fraction(format: NumberFormat) -> Self {
        Self {
            separator: format.digit_separator(),
            internal: format.fraction_internal_digit_separator(),
            leading: format.fraction_leading_digit_separator(),
            trailing: format.fraction_trailing_digit_separator(),
            consecutive: format.fraction_consecutive_digit_separator(),
        }
    }

    pub fn exponent(format: NumberFormat) -> Self {
        Self {
            separator: format.digit_separator(),
            internal: format.exponent_internal_digit_separator(),
            leading: format.exponent_leading_digit_separator(),
            trailing: format.exponent_trailing_digit_separator(),
            consecutive: format.exponent_consecutive_digit_separator(),
        }
    }

    #[inline]
    fn enabled(&self) -> bool {
        self.separator != 0
    }
}

/// Result of scanning one digit region.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DigitRun {
    /// Index just past the last consumed byte.
    pub end: usize,
    /// Number of digits seen (separators excluded).
    pub digits: usize,
    /// Index of the first digit, when there is one.
    pub first_digit: Option<usize>,
}

/// Scan a run of digits under `radix` starting at `start`, skipping digit
/// separators where the placement rules allow them. Each digit is handed to
/// `on_digit` with its byte index; an error from the callback aborts the
/// scan. The scan stops (without error) at the first byte that cannot
/// belong to the region, including a separator in a forbidden position.
pub(crate) fn scan_digits<F>(
    bytes: &[u8],
    start: usize,
    radix: u32,
    rules: SeparatorRules,
    mut on_digit: F,
) -> Result<DigitRun>
where
    F: FnMut(u32, usize) -> Result<()>,
{
    let mut index = start;
    let mut digits = 0usize;
    let mut first_digit = None;
    while index < bytes.len() {
        let byte = bytes[index];
        if let Some(d) = digit_value(byte).filter(|&d| d < radix) {
            on_digit(d, index)?;
            if first_digit.is_none() {
                first_digit = Some(index);
            }
            digits += 1;
            index += 1;
        } else if rules.enabled() && byte == rules.separator {
            let run_start = index;
            let mut run_len = 0;
            while index < bytes.len() && bytes[index] == rules.separator {
                run_len += 1;
                index += 1;
            }
            let followed_by_digit = index < bytes.len()
                && digit_value(bytes[index]).is_some_and(|d| d < radix);
            let placement_ok = if followed_by_digit {
                if digits == 0 { rules.leading } else { rules.internal }
            } else {
                rules.trailing
            };
            let ok = placement_ok && (run_len == 1 || rules.consecutive);
            if !ok {
                return Ok(DigitRun { end: run_start, digits, first_digit });
            }
        } else {
            break;
        }
    }
    Ok(DigitRun { end: index, digits, first_digit })
}

/// Leading-zero rule shared by the integer grammar and the float mantissa:
/// a first digit of zero may not be followed by more digits.
pub(crate) fn check_leading_zeros(bytes: &[u8], run: &DigitRun) -> Result<()> {
    if let Some(first) = run.first_digit {
        if bytes[first] == b'0' && run.digits > 1 {
            return Err(Error::new(ErrorCode::InvalidLeadingZeros, first));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(internal: bool, leading: bool, trailing: bool, consecutive: bool) -> SeparatorRules {
        SeparatorRules { separator: b'_', internal, leading, trailing, consecutive }
    }

    fn collect(bytes: &[u8], rules: SeparatorRules) -> (Vec<u32>, usize) {
        let mut out = Vec::new();
        let run = scan_digits(bytes, 0, 10, rules, |d, _| {
            out.push(d);
            Ok(())
        })
        .unwrap();
        (out, run.end)
    }

    #[test]
    fn test_scan_plain_digits() {
        let (digits, end) = collect(b"123a", rules(false, false, false, false));
        assert_eq!(digits, vec![1, 2, 3]);
        assert_eq!(end, 3);
    }

    #[test]
    fn test_scan_internal_separator() {
        let r = rules(true, false, false, false);
        let (digits, end) = collect(b"3_1", r);
        assert_eq!(digits, vec![3, 1]);
        assert_eq!(end, 3);
        // Leading separator stops the scan with nothing consumed.
        let (digits, end) = collect(b"_31", r);
        assert!(digits.is_empty());
        assert_eq!(end, 0);
        // Trailing separator stops the scan at the separator.
        let (digits, end) = collect(b"31_", r);
        assert_eq!(digits, vec![3, 1]);
        assert_eq!(end, 2);
    }

    #[test]
    fn test_scan_leading_separator() {
        let r = rules(false, true, false, false);
        let (digits, end) = collect(b"_31", r);
        assert_eq!(digits, vec![3, 1]);
        assert_eq!(end, 3);
        let (_, end) = collect(b"3_1", r);
        assert_eq!(end, 1);
    }

    #[test]
    fn test_scan_trailing_separator() {
        let r = rules(false, false, true, false);
        let (digits, end) = collect(b"31_", r);
        assert_eq!(digits, vec![3, 1]);
        assert_eq!(end, 3);
        let (_, end) = collect(b"3_1", r);
        assert_eq!(end, 1);
    }

    #[test]
    fn test_scan_consecutive_separator() {
        let with = rules(true, false, false, true);
        let (digits, end) = collect(b"3__1", with);
        assert_eq!(digits, vec![3, 1]);
        assert_eq!(end, 4);
        let without = rules(true, false, false, false);
        let (_, end) = collect(b"3__1", without);
        assert_eq!(end, 1);
    }

    #[test]
    fn test_scan_radix() {
        let mut out = Vec::new();
        let run = scan_digits(b"ff", 0, 16, rules(false, false, false, false), |d, _| {
            out.push(d);
            Ok(())
        })
        .unwrap();
        assert_eq!(out, vec![15, 15]);
        assert_eq!(run.end, 2);
        // 'f' is not a digit under radix 10.
        let run = scan_digits(b"ff", 0, 10, rules(false, false, false, false), |_, _| Ok(()))
            .unwrap();
        assert_eq!(run.end, 0);
        assert_eq!(run.digits, 0);
    }

    #[test]
    fn test_scan_sign() {
        let (info, len) = scan_sign(b"-12");
        assert_eq!(info.sign, Sign::Negative);
        assert!(info.explicit);
        assert_eq!(len, 1);
        let (info, len) = scan_sign(b"+12");
        assert!(info.positive_explicit);
        assert_eq!(len, 1);
        let (info, len) = scan_sign(b"12");
        assert!(!info.explicit);
        assert_eq!(len, 0);
    }

    #[test]
    fn test_leading_zero_check() {
        let run = DigitRun { end: 3, digits: 3, first_digit: Some(0) };
        let err = check_leading_zeros(b"012", &run).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidLeadingZeros);
        assert_eq!(err.index(), 0);
        let run = DigitRun { end: 1, digits: 1, first_digit: Some(0) };
        assert!(check_leading_zeros(b"0", &run).is_ok());
    }
}
