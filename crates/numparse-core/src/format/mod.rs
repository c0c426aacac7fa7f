//! Number format grammar, packed into a `u64`.
//!
//! Layout: bits 0..=12 hold syntax flags, bits 32..=44 hold digit separator
//! placement flags, and the top byte (bits 56..=63) holds the separator
//! character itself. A zero separator byte means "no digit separators".

mod builder;
mod presets;

pub use builder::NumberFormatBuilder;

/// A compiled number format grammar.
///
/// Immutable once built. Construct one through [`NumberFormat::builder`],
/// one of the constructors ([`permissive`](NumberFormat::permissive),
/// [`standard`](NumberFormat::standard), [`ignore`](NumberFormat::ignore)),
/// or a named preset such as [`NumberFormat::JSON`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NumberFormat(u64);

// ---- syntax flags ----

impl NumberFormat {
    /// Digits are required before the decimal point.
    pub const REQUIRED_INTEGER_DIGITS: u64 = 0x1;
    /// Digits are required after the decimal point, if a point is present.
    pub const REQUIRED_FRACTION_DIGITS: u64 = 0x2;
    /// Digits are required after the exponent marker, if one is present.
    pub const REQUIRED_EXPONENT_DIGITS: u64 = 0x4;
    /// A `+` sign before the mantissa is forbidden.
    pub const NO_POSITIVE_MANTISSA_SIGN: u64 = 0x8;
    /// An explicit sign before the mantissa is required.
    pub const REQUIRED_MANTISSA_SIGN: u64 = 0x10;
    /// Exponent notation is forbidden.
    pub const NO_EXPONENT_NOTATION: u64 = 0x20;
    /// A `+` sign before the exponent is forbidden.
    pub const NO_POSITIVE_EXPONENT_SIGN: u64 = 0x40;
    /// An explicit sign before the exponent is required.
    pub const REQUIRED_EXPONENT_SIGN: u64 = 0x80;
    /// An exponent may not follow an integer with no fraction.
    pub const NO_EXPONENT_WITHOUT_FRACTION: u64 = 0x100;
    /// Special values (NaN, Infinity) are forbidden.
    pub const NO_SPECIAL: u64 = 0x200;
    /// Special values match case-sensitively.
    pub const CASE_SENSITIVE_SPECIAL: u64 = 0x400;
    /// Integers may not have leading zeros.
    pub const NO_INTEGER_LEADING_ZEROS: u64 = 0x800;
    /// Floats may not have leading zeros.
    pub const NO_FLOAT_LEADING_ZEROS: u64 = 0x1000;

    /// Digits are required everywhere they can appear.
    pub const REQUIRED_DIGITS: u64 = Self::REQUIRED_INTEGER_DIGITS
        | Self::REQUIRED_FRACTION_DIGITS
        | Self::REQUIRED_EXPONENT_DIGITS;
}

// ---- digit separator flags ----

impl NumberFormat {
    pub const INTEGER_INTERNAL_DIGIT_SEPARATOR: u64 = 0x1_0000_0000;
    pub const INTEGER_LEADING_DIGIT_SEPARATOR: u64 = 0x2_0000_0000;
    pub const INTEGER_TRAILING_DIGIT_SEPARATOR: u64 = 0x4_0000_0000;
    pub const INTEGER_CONSECUTIVE_DIGIT_SEPARATOR: u64 = 0x8_0000_0000;
    pub const FRACTION_INTERNAL_DIGIT_SEPARATOR: u64 = 0x10_0000_0000;
    pub const FRACTION_LEADING_DIGIT_SEPARATOR: u64 = 0x20_0000_0000;
    pub const FRACTION_TRAILING_DIGIT_SEPARATOR: u64 = 0x40_0000_0000;
    pub const FRACTION_CONSECUTIVE_DIGIT_SEPARATOR: u64 = 0x80_0000_0000;
    pub const EXPONENT_INTERNAL_DIGIT_SEPARATOR: u64 = 0x100_0000_0000;
    pub const EXPONENT_LEADING_DIGIT_SEPARATOR: u64 = 0x200_0000_0000;
    pub const EXPONENT_TRAILING_DIGIT_SEPARATOR: u64 = 0x400_0000_0000;
    pub const EXPONENT_CONSECUTIVE_DIGIT_SEPARATOR: u64 = 0x800_0000_0000;
    /// Digit separators may appear inside special value spellings.
    pub const SPECIAL_DIGIT_SEPARATOR: u64 = 0x1000_0000_0000;

    /// Internal separators allowed in every region.
    pub const INTERNAL_DIGIT_SEPARATOR: u64 = Self::INTEGER_INTERNAL_DIGIT_SEPARATOR
        | Self::FRACTION_INTERNAL_DIGIT_SEPARATOR
        | Self::EXPONENT_INTERNAL_DIGIT_SEPARATOR;
    /// Leading separators allowed in every region.
    pub const LEADING_DIGIT_SEPARATOR: u64 = Self::INTEGER_LEADING_DIGIT_SEPARATOR
        | Self::FRACTION_LEADING_DIGIT_SEPARATOR
        | Self::EXPONENT_LEADING_DIGIT_SEPARATOR;
    /// Trailing separators allowed in every region.
    pub const TRAILING_DIGIT_SEPARATOR: u64 = Self::INTEGER_TRAILING_DIGIT_SEPARATOR
        | Self::FRACTION_TRAILING_DIGIT_SEPARATOR
        | Self::EXPONENT_TRAILING_DIGIT_SEPARATOR;
    /// Consecutive separators allowed in every region.
    pub const CONSECUTIVE_DIGIT_SEPARATOR: u64 = Self::INTEGER_CONSECUTIVE_DIGIT_SEPARATOR
        | Self::FRACTION_CONSECUTIVE_DIGIT_SEPARATOR
        | Self::EXPONENT_CONSECUTIVE_DIGIT_SEPARATOR;

    pub(crate) const DIGIT_SEPARATOR_FLAG_MASK: u64 = Self::INTERNAL_DIGIT_SEPARATOR
        | Self::LEADING_DIGIT_SEPARATOR
        | Self::TRAILING_DIGIT_SEPARATOR
        | Self::CONSECUTIVE_DIGIT_SEPARATOR
        | Self::SPECIAL_DIGIT_SEPARATOR;

    pub(crate) const FLAG_MASK: u64 = Self::REQUIRED_DIGITS
        | Self::NO_POSITIVE_MANTISSA_SIGN
        | Self::REQUIRED_MANTISSA_SIGN
        | Self::NO_EXPONENT_NOTATION
        | Self::NO_POSITIVE_EXPONENT_SIGN
        | Self::REQUIRED_EXPONENT_SIGN
        | Self::NO_EXPONENT_WITHOUT_FRACTION
        | Self::NO_SPECIAL
        | Self::CASE_SENSITIVE_SPECIAL
        | Self::NO_INTEGER_LEADING_ZEROS
        | Self::NO_FLOAT_LEADING_ZEROS
        | Self::DIGIT_SEPARATOR_FLAG_MASK;

    const DIGIT_SEPARATOR_SHIFT: u32 = 56;
}

// ---- construction ----

impl NumberFormat {
    /// Place a digit separator character into its packed position.
    #[inline]
    pub(crate) const fn separator_to_flags(ch: u8) -> u64 {
        (ch as u64) << Self::DIGIT_SEPARATOR_SHIFT
    }

    #[inline]
    pub(crate) const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Start building a format from scratch.
    #[inline]
    pub const fn builder() -> NumberFormatBuilder {
        NumberFormatBuilder::new()
    }

    /// Builder seeded with this format's current settings.
    #[inline]
    pub const fn rebuild(self) -> NumberFormatBuilder {
        NumberFormatBuilder::from_format(self)
    }

    /// No grammar restrictions beyond the presence of mantissa digits.
    #[inline]
    pub const fn permissive() -> Self {
        Self(0)
    }

    /// The conventional float grammar: exponent digits required after a
    /// marker, everything else optional.
    #[inline]
    pub const fn standard() -> Self {
        Self(Self::REQUIRED_EXPONENT_DIGITS)
    }

    /// A format that skips `separator` anywhere digits or special values
    /// appear. Fails if the separator is not a valid separator character.
    pub fn ignore(separator: u8) -> Option<Self> {
        Self::builder()
            .digit_separator(separator)
            .internal_digit_separator(true)
            .leading_digit_separator(true)
            .trailing_digit_separator(true)
            .consecutive_digit_separator(true)
            .special_digit_separator(true)
            .build()
    }

    /// A separator character may not be misread as part of the number.
    pub(crate) fn is_valid_separator(ch: u8) -> bool {
        ch.is_ascii() && !ch.is_ascii_digit() && ch != b'+' && ch != b'-' && ch != b'.'
    }
}

// ---- queries ----

impl NumberFormat {
    /// The raw packed representation.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// All flag bits, without the separator byte.
    #[inline]
    pub const fn flags(self) -> u64 {
        self.0 & Self::FLAG_MASK
    }

    /// The digit separator character, or 0 if none.
    #[inline]
    pub const fn digit_separator(self) -> u8 {
        (self.0 >> Self::DIGIT_SEPARATOR_SHIFT) as u8
    }

    #[inline]
    pub const fn has_digit_separator(self) -> bool {
        self.digit_separator() != 0
    }

    #[inline]
    const fn has(self, flag: u64) -> bool {
        self.0 & flag != 0
    }

    #[inline]
    pub const fn required_integer_digits(self) -> bool {
        self.has(Self::REQUIRED_INTEGER_DIGITS)
    }

    #[inline]
    pub const fn required_fraction_digits(self) -> bool {
        self.has(Self::REQUIRED_FRACTION_DIGITS)
    }

    #[inline]
    pub const fn required_exponent_digits(self) -> bool {
        self.has(Self::REQUIRED_EXPONENT_DIGITS)
    }

    #[inline]
    pub const fn required_digits(self) -> bool {
        self.0 & Self::REQUIRED_DIGITS == Self::REQUIRED_DIGITS
    }

    #[inline]
    pub const fn no_positive_mantissa_sign(self) -> bool {
        self.has(Self::NO_POSITIVE_MANTISSA_SIGN)
    }

    #[inline]
    pub const fn required_mantissa_sign(self) -> bool {
        self.has(Self::REQUIRED_MANTISSA_SIGN)
    }

    #[inline]
    pub const fn no_exponent_notation(self) -> bool {
        self.has(Self::NO_EXPONENT_NOTATION)
    }

    #[inline]
    pub const fn no_positive_exponent_sign(self) -> bool {
        self.has(Self::NO_POSITIVE_EXPONENT_SIGN)
    }

    #[inline]
    pub const fn required_exponent_sign(self) -> bool {
        self.has(Self::REQUIRED_EXPONENT_SIGN)
    }

    #[inline]
    pub const fn no_exponent_without_fraction(self) -> bool {
        self.has(Self::NO_EXPONENT_WITHOUT_FRACTION)
    }

    #[inline]
    pub const fn no_special(self) -> bool {
        self.has(Self::NO_SPECIAL)
    }

    #[inline]
    pub const fn case_sensitive_special(self) -> bool {
        self.has(Self::CASE_SENSITIVE_SPECIAL)
    }

    #[inline]
    pub const fn no_integer_leading_zeros(self) -> bool {
        self.has(Self::NO_INTEGER_LEADING_ZEROS)
    }

    #[inline]
    pub const fn no_float_leading_zeros(self) -> bool {
        self.has(Self::NO_FLOAT_LEADING_ZEROS)
    }

    #[inline]
    pub const fn integer_internal_digit_separator(self) -> bool {
        self.has(Self::INTEGER_INTERNAL_DIGIT_SEPARATOR)
    }

    #[inline]
    pub const fn integer_leading_digit_separator(self) -> bool {
        self.has(Self::INTEGER_LEADING_DIGIT_SEPARATOR)
    }

    #[inline]
    pub const fn integer_trailing_digit_separator(self) -> bool {
        self.has(Self::INTEGER_TRAILING_DIGIT_SEPARATOR)
    }

    #[inline]
    pub const fn integer_consecutive_digit_separator(self) -> bool {
        self.has(Self::INTEGER_CONSECUTIVE_DIGIT_SEPARATOR)
    }

    #[inline]
    pub const fn fraction_internal_digit_separator(self) -> bool {
        self.has(Self::FRACTION_INTERNAL_DIGIT_SEPARATOR)
    }

    #[inline]
    pub const fn fraction_leading_digit_separator(self) -> bool {
        self.has(Self::FRACTION_LEADING_DIGIT_SEPARATOR)
    }

    #[inline]
    pub const fn fraction_trailing_digit_separator(self) -> bool {
        self.has(Self::FRACTION_TRAILING_DIGIT_SEPARATOR)
    }

    #[inline]
    pub const fn fraction_consecutive_digit_separator(self) -> bool {
        self.has(Self::FRACTION_CONSECUTIVE_DIGIT_SEPARATOR)
    }

    #[inline]
    pub const fn exponent_internal_digit_separator(self) -> bool {
        self.has(Self::EXPONENT_INTERNAL_DIGIT_SEPARATOR)
    }

    #[inline]
    pub const fn exponent_leading_digit_separator(self) -> bool {
        self.has(Self::EXPONENT_LEADING_DIGIT_SEPARATOR)
    }

    #[inline]
    pub const fn exponent_trailing_digit_separator(self) -> bool {
        self.has(Self::EXPONENT_TRAILING_DIGIT_SEPARATOR)
    }

    #[inline]
    pub const fn exponent_consecutive_digit_separator(self) -> bool {
        self.has(Self::EXPONENT_CONSECUTIVE_DIGIT_SEPARATOR)
    }

    #[inline]
    pub const fn special_digit_separator(self) -> bool {
        self.has(Self::SPECIAL_DIGIT_SEPARATOR)
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_layout() {
        assert_eq!(NumberFormat::REQUIRED_INTEGER_DIGITS, 1 << 0);
        assert_eq!(NumberFormat::NO_FLOAT_LEADING_ZEROS, 1 << 12);
        assert_eq!(NumberFormat::INTEGER_INTERNAL_DIGIT_SEPARATOR, 1 << 32);
        assert_eq!(NumberFormat::SPECIAL_DIGIT_SEPARATOR, 1 << 44);
        assert_eq!(NumberFormat::separator_to_flags(b'_'), (b'_' as u64) << 56);
    }

    #[test]
    fn test_permissive_and_standard() {
        assert_eq!(NumberFormat::permissive().flags(), 0);
        assert!(!NumberFormat::permissive().required_exponent_digits());
        assert!(NumberFormat::standard().required_exponent_digits());
        assert_eq!(NumberFormat::standard(), NumberFormat::default());
    }

    #[test]
    fn test_ignore() {
        let fmt = NumberFormat::ignore(b'_').unwrap();
        assert_eq!(fmt.digit_separator(), b'_');
        assert!(fmt.integer_internal_digit_separator());
        assert!(fmt.fraction_leading_digit_separator());
        assert!(fmt.exponent_trailing_digit_separator());
        assert!(fmt.integer_consecutive_digit_separator());
        assert!(fmt.special_digit_separator());
        assert!(NumberFormat::ignore(b'0').is_none());
        assert!(NumberFormat::ignore(b'+').is_none());
    }

    #[test]
    fn test_separator_validity() {
        assert!(NumberFormat::is_valid_separator(b'_'));
        assert!(NumberFormat::is_valid_separator(b'\''));
        assert!(NumberFormat::is_valid_separator(b','));
        assert!(!NumberFormat::is_valid_separator(b'5'));
        assert!(!NumberFormat::is_valid_separator(b'-'));
        assert!(!NumberFormat::is_valid_separator(b'.'));
        assert!(!NumberFormat::is_valid_separator(0x80));
    }
}
