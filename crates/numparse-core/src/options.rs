//! Immutable option sets for the parse and write entry points.
//!
//! Each options type is built by a validating builder whose `build` returns
//! `None` for inconsistent settings, so an options value in hand is always
//! coherent. Options are `Copy` and freely shared across threads.

use crate::format::NumberFormat;

/// IEEE 754 rounding mode applied when a parsed value falls between two
/// representable floats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingKind {
    /// Round to nearest, ties to the even significand.
    #[default]
    NearestTieEven,
    /// Round to nearest, ties away from zero.
    NearestTieAwayZero,
    /// Round toward positive infinity.
    TowardPositiveInfinity,
    /// Round toward negative infinity.
    TowardNegativeInfinity,
    /// Round toward zero.
    TowardZero,
}

#[inline]
fn valid_radix(radix: u32) -> bool {
    (2..=36).contains(&radix)
}

/// Is `ch` a digit under `radix`, in either letter case?
#[inline]
pub(crate) fn is_digit_in_radix(ch: u8, radix: u32) -> bool {
    digit_value(ch).is_some_and(|d| d < radix)
}

/// Numeric value of an ASCII digit or letter, case-insensitive.
#[inline]
pub(crate) fn digit_value(ch: u8) -> Option<u32> {
    match ch {
        b'0'..=b'9' => Some((ch - b'0') as u32),
        b'a'..=b'z' => Some((ch - b'a') as u32 + 10),
        b'A'..=b'Z' => Some((ch - b'A') as u32 + 10),
        _ => None,
    }
}

fn valid_exponent_char(ch: u8, radix: u32, format: NumberFormat) -> bool {
    ch.is_ascii()
        && !is_digit_in_radix(ch, radix)
        && ch != b'+'
        && ch != b'-'
        && ch != b'.'
        && (!format.has_digit_separator() || ch != format.digit_separator())
}

fn valid_separator_for_radix(format: NumberFormat, radix: u32) -> bool {
    !format.has_digit_separator() || !is_digit_in_radix(format.digit_separator(), radix)
}

fn valid_nan_string(s: &[u8]) -> bool {
    matches!(s.first(), Some(b'n' | b'N'))
}

fn valid_inf_string(s: &[u8]) -> bool {
    matches!(s.first(), Some(b'i' | b'I'))
}

// ---- parse integer ----

/// Options for parsing integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseIntegerOptions {
    radix: u32,
    format: NumberFormat,
}

impl ParseIntegerOptions {
    #[inline]
    pub fn builder() -> ParseIntegerOptionsBuilder {
        ParseIntegerOptionsBuilder::new()
    }

    /// Radix 2, permissive grammar.
    #[inline]
    pub fn binary() -> Self {
        Self { radix: 2, format: NumberFormat::permissive() }
    }

    /// Radix 10, permissive grammar.
    #[inline]
    pub fn decimal() -> Self {
        Self { radix: 10, format: NumberFormat::permissive() }
    }

    /// Radix 16, permissive grammar.
    #[inline]
    pub fn hexadecimal() -> Self {
        Self { radix: 16, format: NumberFormat::permissive() }
    }

    #[inline]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    #[inline]
    pub fn format(&self) -> NumberFormat {
        self.format
    }
}

impl Default for ParseIntegerOptions {
    fn default() -> Self {
        Self::decimal()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ParseIntegerOptionsBuilder {
    radix: u32,
    format: NumberFormat,
}

impl ParseIntegerOptionsBuilder {
    #[inline]
    pub fn new() -> Self {
        Self { radix: 10, format: NumberFormat::permissive() }
    }

    #[inline]
    pub fn radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    #[inline]
    pub fn format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    pub fn build(self) -> Option<ParseIntegerOptions> {
        if !valid_radix(self.radix) || !valid_separator_for_radix(self.format, self.radix) {
            return None;
        }
        Some(ParseIntegerOptions { radix: self.radix, format: self.format })
    }
}

impl Default for ParseIntegerOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---- parse float ----

/// Options for parsing floats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseFloatOptions {
    lossy: bool,
    exponent_char: u8,
    radix: u32,
    format: NumberFormat,
    rounding: RoundingKind,
    nan_string: &'static [u8],
    inf_string: &'static [u8],
    infinity_string: &'static [u8],
}

impl ParseFloatOptions {
    #[inline]
    pub fn builder() -> ParseFloatOptionsBuilder {
        ParseFloatOptionsBuilder::new()
    }

    /// Radix 2, standard grammar, exponent char `e`.
    #[inline]
    pub fn binary() -> Self {
        Self { radix: 2, ..Self::decimal() }
    }

    /// Radix 10, standard grammar, exponent char `e`.
    #[inline]
    pub fn decimal() -> Self {
        Self {
            lossy: false,
            exponent_char: b'e',
            radix: 10,
            format: NumberFormat::standard(),
            rounding: RoundingKind::NearestTieEven,
            nan_string: b"NaN",
            inf_string: b"inf",
            infinity_string: b"infinity",
        }
    }

    /// Radix 16, standard grammar, exponent char `p` (`e` is a hex digit).
    #[inline]
    pub fn hexadecimal() -> Self {
        Self { radix: 16, exponent_char: b'p', ..Self::decimal() }
    }

    #[inline]
    pub fn lossy(&self) -> bool {
        self.lossy
    }

    #[inline]
    pub fn exponent_char(&self) -> u8 {
        self.exponent_char
    }

    #[inline]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    #[inline]
    pub fn format(&self) -> NumberFormat {
        self.format
    }

    #[inline]
    pub fn rounding(&self) -> RoundingKind {
        self.rounding
    }

    #[inline]
    pub fn nan_string(&self) -> &'static [u8] {
        self.nan_string
    }

    #[inline]
    pub fn inf_string(&self) -> &'static [u8] {
        self.inf_string
    }

    #[inline]
    pub fn infinity_string(&self) -> &'static [u8] {
        self.infinity_string
    }
}

impl Default for ParseFloatOptions {
    fn default() -> Self {
        Self::decimal()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ParseFloatOptionsBuilder {
    lossy: bool,
    exponent_char: u8,
    radix: u32,
    format: NumberFormat,
    rounding: RoundingKind,
    nan_string: &'static [u8],
    inf_string: &'static [u8],
    infinity_string: &'static [u8],
}

impl ParseFloatOptionsBuilder {
    #[inline]
    pub fn new() -> Self {
        let defaults = ParseFloatOptions::decimal();
        Self {
            lossy: defaults.lossy,
            exponent_char: defaults.exponent_char,
            radix: defaults.radix,
            format: defaults.format,
            rounding: defaults.rounding,
            nan_string: defaults.nan_string,
            inf_string: defaults.inf_string,
            infinity_string: defaults.infinity_string,
        }
    }

    #[inline]
    pub fn lossy(mut self, lossy: bool) -> Self {
        self.lossy = lossy;
        self
    }

    #[inline]
    pub fn exponent_char(mut self, ch: u8) -> Self {
        self.exponent_char = ch;
        self
    }

    #[inline]
    pub fn radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    #[inline]
    pub fn format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    #[inline]
    pub fn rounding(mut self, rounding: RoundingKind) -> Self {
        self.rounding = rounding;
        self
    }

    #[inline]
    pub fn nan_string(mut self, s: &'static [u8]) -> Self {
        self.nan_string = s;
        self
    }

    #[inline]
    pub fn inf_string(mut self, s: &'static [u8]) -> Self {
        self.inf_string = s;
        self
    }

    #[inline]
    pub fn infinity_string(mut self, s: &'static [u8]) -> Self {
        self.infinity_string = s;
        self
    }

    pub fn build(self) -> Option<ParseFloatOptions> {
        if !valid_radix(self.radix)
            || !valid_exponent_char(self.exponent_char, self.radix, self.format)
            || !valid_separator_for_radix(self.format, self.radix)
            || !valid_nan_string(self.nan_string)
            || !valid_inf_string(self.inf_string)
            || !valid_inf_string(self.infinity_string)
            || self.infinity_string.len() < self.inf_string.len()
        {
            return None;
        }
        Some(ParseFloatOptions {
            lossy: self.lossy,
            exponent_char: self.exponent_char,
            radix: self.radix,
            format: self.format,
            rounding: self.rounding,
            nan_string: self.nan_string,
            inf_string: self.inf_string,
            infinity_string: self.infinity_string,
        })
    }
}

impl Default for ParseFloatOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---- write integer ----

/// Options for formatting integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteIntegerOptions {
    radix: u32,
}

impl WriteIntegerOptions {
    #[inline]
    pub fn builder() -> WriteIntegerOptionsBuilder {
        WriteIntegerOptionsBuilder::new()
    }

    #[inline]
    pub fn binary() -> Self {
        Self { radix: 2 }
    }

    #[inline]
    pub fn decimal() -> Self {
        Self { radix: 10 }
    }

    #[inline]
    pub fn hexadecimal() -> Self {
        Self { radix: 16 }
    }

    #[inline]
    pub fn radix(&self) -> u32 {
        self.radix
    }
}

impl Default for WriteIntegerOptions {
    fn default() -> Self {
        Self::decimal()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct WriteIntegerOptionsBuilder {
    radix: u32,
}

impl WriteIntegerOptionsBuilder {
    #[inline]
    pub fn new() -> Self {
        Self { radix: 10 }
    }

    #[inline]
    pub fn radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    pub fn build(self) -> Option<WriteIntegerOptions> {
        if !valid_radix(self.radix) {
            return None;
        }
        Some(WriteIntegerOptions { radix: self.radix })
    }
}

impl Default for WriteIntegerOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---- write float ----

/// Options for formatting floats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteFloatOptions {
    exponent_char: u8,
    radix: u32,
    trim_floats: bool,
    nan_string: &'static [u8],
    inf_string: &'static [u8],
}

impl WriteFloatOptions {
    #[inline]
    pub fn builder() -> WriteFloatOptionsBuilder {
        WriteFloatOptionsBuilder::new()
    }

    #[inline]
    pub fn binary() -> Self {
        Self { radix: 2, ..Self::decimal() }
    }

    #[inline]
    pub fn decimal() -> Self {
        Self {
            exponent_char: b'e',
            radix: 10,
            trim_floats: false,
            nan_string: b"NaN",
            inf_string: b"inf",
        }
    }

    #[inline]
    pub fn hexadecimal() -> Self {
        Self { radix: 16, exponent_char: b'p', ..Self::decimal() }
    }

    #[inline]
    pub fn exponent_char(&self) -> u8 {
        self.exponent_char
    }

    #[inline]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    #[inline]
    pub fn trim_floats(&self) -> bool {
        self.trim_floats
    }

    #[inline]
    pub fn nan_string(&self) -> &'static [u8] {
        self.nan_string
    }

    #[inline]
    pub fn inf_string(&self) -> &'static [u8] {
        self.inf_string
    }
}

impl Default for WriteFloatOptions {
    fn default() -> Self {
        Self::decimal()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct WriteFloatOptionsBuilder {
    exponent_char: u8,
    radix: u32,
    trim_floats: bool,
    nan_string: &'static [u8],
    inf_string: &'static [u8],
}

impl WriteFloatOptionsBuilder {
    #[inline]
    pub fn new() -> Self {
        let defaults = WriteFloatOptions::decimal();
        Self {
            exponent_char: defaults.exponent_char,
            radix: defaults.radix,
            trim_floats: defaults.trim_floats,
            nan_string: defaults.nan_string,
            inf_string: defaults.inf_string,
        }
    }

    #[inline]
    pub fn exponent_char(mut self, ch: u8) -> Self {
        self.exponent_char = ch;
        self
    }

    #[inline]
    pub fn radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    #[inline]
    pub fn trim_floats(mut self, trim: bool) -> Self {
        self.trim_floats = trim;
        self
    }

    #[inline]
    pub fn nan_string(mut self, s: &'static [u8]) -> Self {
        self.nan_string = s;
        self
    }

    #[inline]
    pub fn inf_string(mut self, s: &'static [u8]) -> Self {
        self.inf_string = s;
        self
    }

    pub fn build(self) -> Option<WriteFloatOptions> {
        if !valid_radix(self.radix)
            || !valid_exponent_char(self.exponent_char, self.radix, NumberFormat::permissive())
            || !valid_nan_string(self.nan_string)
            || !valid_inf_string(self.inf_string)
        {
            return None;
        }
        Some(WriteFloatOptions {
            exponent_char: self.exponent_char,
            radix: self.radix,
            trim_floats: self.trim_floats,
            nan_string: self.nan_string,
            inf_string: self.inf_string,
        })
    }
}

impl Default for WriteFloatOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
