//! Fluent builder for [`NumberFormat`].

use super::NumberFormat;

/// Builds a [`NumberFormat`] one flag at a time.
///
/// `build` validates the combination and returns `None` when the settings
/// contradict each other, so an invalid grammar can never be constructed.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberFormatBuilder {
    digit_separator: u8,
    required_integer_digits: bool,
    required_fraction_digits: bool,
    required_exponent_digits: bool,
    no_positive_mantissa_sign: bool,
    required_mantissa_sign: bool,
    no_exponent_notation: bool,
    no_positive_exponent_sign: bool,
    required_exponent_sign: bool,
    no_exponent_without_fraction: bool,
    no_special: bool,
    case_sensitive_special: bool,
    no_integer_leading_zeros: bool,
    no_float_leading_zeros: bool,
    integer_internal_digit_separator: bool,
    integer_leading_digit_separator: bool,
    integer_trailing_digit_separator: bool,
    integer_consecutive_digit_separator: bool,
    fraction_internal_digit_separator: bool,
    fraction_leading_digit_separator: bool,
    fraction_trailing_digit_separator: bool,
    fraction_consecutive_digit_separator: bool,
    exponent_internal_digit_separator: bool,
    exponent_leading_digit_separator: bool,
    exponent_trailing_digit_separator: bool,
    exponent_consecutive_digit_separator: bool,
    special_digit_separator: bool,
}

macro_rules! setter {
    ($($(#[$attr:meta])* $name:ident),* $(,)?) => {$(
        $(#[$attr])*
        #[inline]
        pub const fn $name(mut self, value: bool) -> Self {
            self.$name = value;
            self
        }
    )*};
}

impl NumberFormatBuilder {
    #[inline]
    pub const fn new() -> Self {
        Self {
            digit_separator: 0,
            required_integer_digits: false,
            required_fraction_digits: false,
            required_exponent_digits: false,
            no_positive_mantissa_sign: false,
            required_mantissa_sign: false,
            no_exponent_notation: false,
            no_positive_exponent_sign: false,
            required_exponent_sign: false,
            no_exponent_without_fraction: false,
            no_special: false,
            case_sensitive_special: false,
            no_integer_leading_zeros: false,
            no_float_leading_zeros: false,
            integer_internal_digit_separator: false,
            integer_leading_digit_separator: false,
            integer_trailing_digit_separator: false,
            integer_consecutive_digit_separator: false,
            fraction_internal_digit_separator: false,
            fraction_leading_digit_separator: false,
            fraction_trailing_digit_separator: false,
            fraction_consecutive_digit_separator: false,
            exponent_internal_digit_separator: false,
            exponent_leading_digit_separator: false,
            exponent_trailing_digit_separator: false,
            exponent_consecutive_digit_separator: false,
            special_digit_separator: false,
        }
    }

    pub(super) const fn from_format(fmt: NumberFormat) -> Self {
        Self {
            digit_separator: fmt.digit_separator(),
            required_integer_digits: fmt.required_integer_digits(),
            required_fraction_digits: fmt.required_fraction_digits(),
            required_exponent_digits: fmt.required_exponent_digits(),
            no_positive_mantissa_sign: fmt.no_positive_mantissa_sign(),
            required_mantissa_sign: fmt.required_mantissa_sign(),
            no_exponent_notation: fmt.no_exponent_notation(),
            no_positive_exponent_sign: fmt.no_positive_exponent_sign(),
            required_exponent_sign: fmt.required_exponent_sign(),
            no_exponent_without_fraction: fmt.no_exponent_without_fraction(),
            no_special: fmt.no_special(),
            case_sensitive_special: fmt.case_sensitive_special(),
            no_integer_leading_zeros: fmt.no_integer_leading_zeros(),
            no_float_leading_zeros: fmt.no_float_leading_zeros(),
            integer_internal_digit_separator: fmt.integer_internal_digit_separator(),
            integer_leading_digit_separator: fmt.integer_leading_digit_separator(),
            integer_trailing_digit_separator: fmt.integer_trailing_digit_separator(),
            integer_consecutive_digit_separator: fmt.integer_consecutive_digit_separator(),
            fraction_internal_digit_separator: fmt.fraction_internal_digit_separator(),
            fraction_leading_digit_separator: fmt.fraction_leading_digit_separator(),
            fraction_trailing_digit_separator: fmt.fraction_trailing_digit_separator(),
            fraction_consecutive_digit_separator: fmt.fraction_consecutive_digit_separator(),
            exponent_internal_digit_separator: fmt.exponent_internal_digit_separator(),
            exponent_leading_digit_separator: fmt.exponent_leading_digit_separator(),
            exponent_trailing_digit_separator: fmt.exponent_trailing_digit_separator(),
            exponent_consecutive_digit_separator: fmt.exponent_consecutive_digit_separator(),
            special_digit_separator: fmt.special_digit_separator(),
        }
    }

    /// The digit separator character. 0 disables separators.
    #[inline]
    pub const fn digit_separator(mut self, ch: u8) -> Self {
        self.digit_separator = ch;
        self
    }

    setter! {
        required_integer_digits,
        required_fraction_digits,
        required_exponent_digits,
        no_positive_mantissa_sign,
        required_mantissa_sign,
        no_exponent_notation,
        no_positive_exponent_sign,
        required_exponent_sign,
        no_exponent_without_fraction,
        no_special,
        case_sensitive_special,
        no_integer_leading_zeros,
        no_float_leading_zeros,
        integer_internal_digit_separator,
        integer_leading_digit_separator,
        integer_trailing_digit_separator,
        integer_consecutive_digit_separator,
        fraction_internal_digit_separator,
        fraction_leading_digit_separator,
        fraction_trailing_digit_separator,
        fraction_consecutive_digit_separator,
        exponent_internal_digit_separator,
        exponent_leading_digit_separator,
        exponent_trailing_digit_separator,
        exponent_consecutive_digit_separator,
        special_digit_separator,
    }

    /// Require digits in all three regions at once.
    #[inline]
    pub const fn required_digits(self, value: bool) -> Self {
        self.required_integer_digits(value)
            .required_fraction_digits(value)
            .required_exponent_digits(value)
    }

    /// Set internal separator placement in all three regions.
    #[inline]
    pub const fn internal_digit_separator(self, value: bool) -> Self {
        self.integer_internal_digit_separator(value)
            .fraction_internal_digit_separator(value)
            .exponent_internal_digit_separator(value)
    }

    /// Set leading separator placement in all three regions.
    #[inline]
    pub const fn leading_digit_separator(self, value: bool) -> Self {
        self.integer_leading_digit_separator(value)
            .fraction_leading_digit_separator(value)
            .exponent_leading_digit_separator(value)
    }

    /// Set trailing separator placement in all three regions.
    #[inline]
    pub const fn trailing_digit_separator(self, value: bool) -> Self {
        self.integer_trailing_digit_separator(value)
            .fraction_trailing_digit_separator(value)
            .exponent_trailing_digit_separator(value)
    }

    /// Set consecutive separator placement in all three regions.
    #[inline]
    pub const fn consecutive_digit_separator(self, value: bool) -> Self {
        self.integer_consecutive_digit_separator(value)
            .fraction_consecutive_digit_separator(value)
            .exponent_consecutive_digit_separator(value)
    }

    /// Validate and compile the format. Returns `None` for contradictory
    /// settings rather than panicking.
    pub fn build(self) -> Option<NumberFormat> {
        let mut bits = 0u64;
        let mut set = |cond: bool, flag: u64| {
            if cond {
                bits |= flag;
            }
        };
        set(self.required_integer_digits, NumberFormat::REQUIRED_INTEGER_DIGITS);
        set(self.required_fraction_digits, NumberFormat::REQUIRED_FRACTION_DIGITS);
        set(self.required_exponent_digits, NumberFormat::REQUIRED_EXPONENT_DIGITS);
        set(self.no_positive_mantissa_sign, NumberFormat::NO_POSITIVE_MANTISSA_SIGN);
        set(self.required_mantissa_sign, NumberFormat::REQUIRED_MANTISSA_SIGN);
        set(self.no_exponent_notation, NumberFormat::NO_EXPONENT_NOTATION);
        set(self.no_positive_exponent_sign, NumberFormat::NO_POSITIVE_EXPONENT_SIGN);
        set(self.required_exponent_sign, NumberFormat::REQUIRED_EXPONENT_SIGN);
        set(self.no_exponent_without_fraction, NumberFormat::NO_EXPONENT_WITHOUT_FRACTION);
        set(self.no_special, NumberFormat::NO_SPECIAL);
        set(self.case_sensitive_special, NumberFormat::CASE_SENSITIVE_SPECIAL);
        set(self.no_integer_leading_zeros, NumberFormat::NO_INTEGER_LEADING_ZEROS);
        set(self.no_float_leading_zeros, NumberFormat::NO_FLOAT_LEADING_ZEROS);
        set(self.integer_internal_digit_separator, NumberFormat::INTEGER_INTERNAL_DIGIT_SEPARATOR);
        set(self.integer_leading_digit_separator, NumberFormat::INTEGER_LEADING_DIGIT_SEPARATOR);
        set(self.integer_trailing_digit_separator, NumberFormat::INTEGER_TRAILING_DIGIT_SEPARATOR);
        set(
            self.integer_consecutive_digit_separator,
            NumberFormat::INTEGER_CONSECUTIVE_DIGIT_SEPARATOR,
        );
        set(
            self.fraction_internal_digit_separator,
            NumberFormat::FRACTION_INTERNAL_DIGIT_SEPARATOR,
        );
        set(self.fraction_leading_digit_separator, NumberFormat::FRACTION_LEADING_DIGIT_SEPARATOR);
        set(
            self.fraction_trailing_digit_separator,
            NumberFormat::FRACTION_TRAILING_DIGIT_SEPARATOR,
        );
        set(
            self.fraction_consecutive_digit_separator,
            NumberFormat::FRACTION_CONSECUTIVE_DIGIT_SEPARATOR,
        );
        set(
            self.exponent_internal_digit_separator,
            NumberFormat::EXPONENT_INTERNAL_DIGIT_SEPARATOR,
        );
        set(self.exponent_leading_digit_separator, NumberFormat::EXPONENT_LEADING_DIGIT_SEPARATOR);
        set(
            self.exponent_trailing_digit_separator,
            NumberFormat::EXPONENT_TRAILING_DIGIT_SEPARATOR,
        );
        set(
            self.exponent_consecutive_digit_separator,
            NumberFormat::EXPONENT_CONSECUTIVE_DIGIT_SEPARATOR,
        );
        set(self.special_digit_separator, NumberFormat::SPECIAL_DIGIT_SEPARATOR);

        let has_separator_flags = bits & NumberFormat::DIGIT_SEPARATOR_FLAG_MASK != 0;
        if self.digit_separator == 0 {
            if has_separator_flags {
                return None;
            }
        } else {
            if !NumberFormat::is_valid_separator(self.digit_separator) {
                return None;
            }
            if !has_separator_flags {
                return None;
            }
            bits |= NumberFormat::separator_to_flags(self.digit_separator);
        }
        Some(NumberFormat::from_bits(bits))
    }
}
