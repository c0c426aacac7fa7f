//! Named grammar presets for common languages and data formats.
//!
//! Each preset encodes the number syntax of the named language's float
//! literals (`*_LITERAL`) or of its string-to-float conversion routine
//! (`*_STRING`). Data formats (JSON, TOML, ...) have a single grammar.

use super::NumberFormat;

const fn sep(ch: u8) -> u64 {
    NumberFormat::separator_to_flags(ch)
}

const fn f(bits: u64) -> NumberFormat {
    NumberFormat::from_bits(bits)
}

impl NumberFormat {
    pub const RUST_LITERAL: Self = f(sep(b'_')
        | Self::REQUIRED_DIGITS
        | Self::NO_POSITIVE_MANTISSA_SIGN
        | Self::NO_SPECIAL
        | Self::INTERNAL_DIGIT_SEPARATOR
        | Self::TRAILING_DIGIT_SEPARATOR
        | Self::CONSECUTIVE_DIGIT_SEPARATOR);
    pub const RUST_STRING: Self = f(Self::REQUIRED_EXPONENT_DIGITS);
    /// `RUST_STRING`, but special values must match case exactly.
    pub const RUST_STRING_STRICT: Self =
        f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);

    pub const PYTHON_LITERAL: Self = f(Self::REQUIRED_EXPONENT_DIGITS | Self::NO_SPECIAL);
    pub const PYTHON_STRING: Self = f(Self::REQUIRED_EXPONENT_DIGITS);

    pub const CXX17_LITERAL: Self = f(sep(b'\'')
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::CASE_SENSITIVE_SPECIAL
        | Self::INTERNAL_DIGIT_SEPARATOR);
    pub const CXX17_STRING: Self = f(Self::REQUIRED_EXPONENT_DIGITS);
    pub const CXX14_LITERAL: Self = Self::CXX17_LITERAL;
    pub const CXX14_STRING: Self = f(Self::REQUIRED_EXPONENT_DIGITS);
    pub const CXX11_LITERAL: Self =
        f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);
    pub const CXX11_STRING: Self = f(Self::REQUIRED_EXPONENT_DIGITS);
    pub const CXX03_LITERAL: Self = f(Self::REQUIRED_EXPONENT_DIGITS | Self::NO_SPECIAL);
    pub const CXX03_STRING: Self = f(Self::REQUIRED_EXPONENT_DIGITS);
    pub const CXX98_LITERAL: Self = f(Self::REQUIRED_EXPONENT_DIGITS | Self::NO_SPECIAL);
    pub const CXX98_STRING: Self = f(Self::REQUIRED_EXPONENT_DIGITS);

    pub const C18_LITERAL: Self = f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);
    pub const C18_STRING: Self = f(Self::REQUIRED_EXPONENT_DIGITS);
    pub const C11_LITERAL: Self = f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);
    pub const C11_STRING: Self = f(Self::REQUIRED_EXPONENT_DIGITS);
    pub const C99_LITERAL: Self = f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);
    pub const C99_STRING: Self = f(Self::REQUIRED_EXPONENT_DIGITS);
    pub const C90_LITERAL: Self = f(Self::REQUIRED_EXPONENT_DIGITS | Self::NO_SPECIAL);
    pub const C90_STRING: Self = f(Self::REQUIRED_EXPONENT_DIGITS);
    pub const C89_LITERAL: Self = f(Self::REQUIRED_EXPONENT_DIGITS | Self::NO_SPECIAL);
    pub const C89_STRING: Self = f(Self::REQUIRED_EXPONENT_DIGITS);

    pub const RUBY_LITERAL: Self = f(sep(b'_')
        | Self::REQUIRED_DIGITS
        | Self::NO_SPECIAL
        | Self::INTERNAL_DIGIT_SEPARATOR);
    pub const RUBY_STRING: Self =
        f(sep(b'_') | Self::NO_SPECIAL | Self::INTERNAL_DIGIT_SEPARATOR);

    pub const SWIFT_LITERAL: Self = f(sep(b'_')
        | Self::REQUIRED_DIGITS
        | Self::NO_SPECIAL
        | Self::INTERNAL_DIGIT_SEPARATOR
        | Self::TRAILING_DIGIT_SEPARATOR
        | Self::CONSECUTIVE_DIGIT_SEPARATOR);
    pub const SWIFT_STRING: Self = f(Self::REQUIRED_FRACTION_DIGITS);

    pub const GO_LITERAL: Self = f(Self::REQUIRED_FRACTION_DIGITS | Self::NO_SPECIAL);
    pub const GO_STRING: Self = f(Self::REQUIRED_FRACTION_DIGITS);

    pub const HASKELL_LITERAL: Self =
        f(Self::REQUIRED_DIGITS | Self::NO_POSITIVE_MANTISSA_SIGN | Self::NO_SPECIAL);
    pub const HASKELL_STRING: Self = f(Self::REQUIRED_DIGITS
        | Self::NO_POSITIVE_MANTISSA_SIGN
        | Self::CASE_SENSITIVE_SPECIAL);

    pub const JAVASCRIPT_LITERAL: Self =
        f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);
    pub const JAVASCRIPT_STRING: Self = f(Self::CASE_SENSITIVE_SPECIAL);

    pub const PERL_LITERAL: Self = f(sep(b'_')
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::NO_SPECIAL
        | Self::INTERNAL_DIGIT_SEPARATOR
        | Self::FRACTION_LEADING_DIGIT_SEPARATOR
        | Self::EXPONENT_LEADING_DIGIT_SEPARATOR
        | Self::TRAILING_DIGIT_SEPARATOR
        | Self::CONSECUTIVE_DIGIT_SEPARATOR);
    pub const PERL_STRING: Self = f(0);

    pub const PHP_LITERAL: Self = f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);
    pub const PHP_STRING: Self = f(Self::NO_SPECIAL);

    pub const JAVA_LITERAL: Self = f(sep(b'_')
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::NO_SPECIAL
        | Self::INTERNAL_DIGIT_SEPARATOR
        | Self::CONSECUTIVE_DIGIT_SEPARATOR);
    pub const JAVA_STRING: Self =
        f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);

    pub const R_LITERAL: Self = f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);
    pub const R_STRING: Self = f(0);

    pub const KOTLIN_LITERAL: Self = f(sep(b'_')
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::NO_SPECIAL
        | Self::INTERNAL_DIGIT_SEPARATOR
        | Self::CONSECUTIVE_DIGIT_SEPARATOR);
    pub const KOTLIN_STRING: Self =
        f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);

    pub const JULIA_LITERAL: Self = f(sep(b'_')
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::CASE_SENSITIVE_SPECIAL
        | Self::INTEGER_INTERNAL_DIGIT_SEPARATOR
        | Self::FRACTION_INTERNAL_DIGIT_SEPARATOR);
    pub const JULIA_STRING: Self = f(Self::REQUIRED_EXPONENT_DIGITS);

    pub const CSHARP7_LITERAL: Self = f(sep(b'_')
        | Self::REQUIRED_FRACTION_DIGITS
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::NO_SPECIAL
        | Self::INTERNAL_DIGIT_SEPARATOR
        | Self::CONSECUTIVE_DIGIT_SEPARATOR);
    pub const CSHARP7_STRING: Self =
        f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);
    pub const CSHARP6_LITERAL: Self = f(Self::REQUIRED_FRACTION_DIGITS
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::NO_SPECIAL);
    pub const CSHARP6_STRING: Self = Self::CSHARP7_STRING;
    pub const CSHARP5_LITERAL: Self = Self::CSHARP6_LITERAL;
    pub const CSHARP5_STRING: Self = Self::CSHARP7_STRING;
    pub const CSHARP4_LITERAL: Self = Self::CSHARP6_LITERAL;
    pub const CSHARP4_STRING: Self = Self::CSHARP7_STRING;
    pub const CSHARP3_LITERAL: Self = Self::CSHARP6_LITERAL;
    pub const CSHARP3_STRING: Self = Self::CSHARP7_STRING;
    pub const CSHARP2_LITERAL: Self = Self::CSHARP6_LITERAL;
    pub const CSHARP2_STRING: Self = Self::CSHARP7_STRING;
    pub const CSHARP1_LITERAL: Self = Self::CSHARP6_LITERAL;
    pub const CSHARP1_STRING: Self = Self::CSHARP7_STRING;

    pub const KAWA_LITERAL: Self = f(Self::REQUIRED_EXPONENT_DIGITS | Self::NO_SPECIAL);
    pub const KAWA_STRING: Self = Self::KAWA_LITERAL;
    pub const GAMBITC_LITERAL: Self = Self::KAWA_LITERAL;
    pub const GAMBITC_STRING: Self = Self::KAWA_LITERAL;
    pub const GUILE_LITERAL: Self = Self::KAWA_LITERAL;
    pub const GUILE_STRING: Self = Self::KAWA_LITERAL;

    pub const CLOJURE_LITERAL: Self = f(Self::REQUIRED_INTEGER_DIGITS
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::NO_SPECIAL);
    pub const CLOJURE_STRING: Self =
        f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);

    pub const ERLANG_LITERAL: Self = f(Self::REQUIRED_DIGITS
        | Self::NO_EXPONENT_WITHOUT_FRACTION
        | Self::CASE_SENSITIVE_SPECIAL);
    pub const ERLANG_STRING: Self =
        f(Self::REQUIRED_DIGITS | Self::NO_EXPONENT_WITHOUT_FRACTION | Self::NO_SPECIAL);

    pub const ELM_LITERAL: Self = f(Self::REQUIRED_DIGITS | Self::NO_POSITIVE_MANTISSA_SIGN);
    pub const ELM_STRING: Self =
        f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);

    pub const SCALA_LITERAL: Self = f(Self::REQUIRED_DIGITS | Self::NO_SPECIAL);
    pub const SCALA_STRING: Self =
        f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);

    pub const ELIXIR_LITERAL: Self = f(sep(b'_')
        | Self::REQUIRED_DIGITS
        | Self::NO_EXPONENT_WITHOUT_FRACTION
        | Self::NO_SPECIAL
        | Self::INTERNAL_DIGIT_SEPARATOR);
    pub const ELIXIR_STRING: Self =
        f(Self::REQUIRED_DIGITS | Self::NO_EXPONENT_WITHOUT_FRACTION | Self::NO_SPECIAL);

    pub const FORTRAN_LITERAL: Self = f(Self::REQUIRED_EXPONENT_DIGITS | Self::NO_SPECIAL);
    pub const FORTRAN_STRING: Self = f(Self::REQUIRED_EXPONENT_DIGITS);

    pub const D_LITERAL: Self = f(sep(b'_')
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::NO_SPECIAL
        | Self::INTERNAL_DIGIT_SEPARATOR
        | Self::TRAILING_DIGIT_SEPARATOR
        | Self::CONSECUTIVE_DIGIT_SEPARATOR);
    pub const D_STRING: Self = f(sep(b'_')
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::INTEGER_INTERNAL_DIGIT_SEPARATOR
        | Self::FRACTION_INTERNAL_DIGIT_SEPARATOR
        | Self::INTEGER_TRAILING_DIGIT_SEPARATOR
        | Self::FRACTION_TRAILING_DIGIT_SEPARATOR);

    pub const COFFEESCRIPT_LITERAL: Self =
        f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);
    pub const COFFEESCRIPT_STRING: Self = f(Self::CASE_SENSITIVE_SPECIAL);

    pub const COBOL_LITERAL: Self = f(Self::REQUIRED_FRACTION_DIGITS
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::NO_EXPONENT_WITHOUT_FRACTION
        | Self::NO_SPECIAL);
    pub const COBOL_STRING: Self = f(Self::REQUIRED_EXPONENT_SIGN | Self::NO_SPECIAL);

    pub const FSHARP_LITERAL: Self = f(sep(b'_')
        | Self::REQUIRED_INTEGER_DIGITS
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::CASE_SENSITIVE_SPECIAL
        | Self::INTERNAL_DIGIT_SEPARATOR
        | Self::CONSECUTIVE_DIGIT_SEPARATOR);
    pub const FSHARP_STRING: Self = f(sep(b'_')
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::INTERNAL_DIGIT_SEPARATOR
        | Self::CASE_SENSITIVE_SPECIAL
        | Self::LEADING_DIGIT_SEPARATOR
        | Self::TRAILING_DIGIT_SEPARATOR
        | Self::CONSECUTIVE_DIGIT_SEPARATOR
        | Self::SPECIAL_DIGIT_SEPARATOR);

    pub const VB_LITERAL: Self = f(Self::REQUIRED_FRACTION_DIGITS
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::NO_SPECIAL);
    pub const VB_STRING: Self =
        f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);

    pub const OCAML_LITERAL: Self = f(sep(b'_')
        | Self::REQUIRED_INTEGER_DIGITS
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::NO_POSITIVE_MANTISSA_SIGN
        | Self::CASE_SENSITIVE_SPECIAL
        | Self::INTERNAL_DIGIT_SEPARATOR
        | Self::FRACTION_LEADING_DIGIT_SEPARATOR
        | Self::TRAILING_DIGIT_SEPARATOR
        | Self::CONSECUTIVE_DIGIT_SEPARATOR);
    pub const OCAML_STRING: Self = f(sep(b'_')
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::INTERNAL_DIGIT_SEPARATOR
        | Self::LEADING_DIGIT_SEPARATOR
        | Self::TRAILING_DIGIT_SEPARATOR
        | Self::CONSECUTIVE_DIGIT_SEPARATOR
        | Self::SPECIAL_DIGIT_SEPARATOR);

    pub const OBJECTIVEC_LITERAL: Self = f(Self::REQUIRED_EXPONENT_DIGITS | Self::NO_SPECIAL);
    pub const OBJECTIVEC_STRING: Self = Self::OBJECTIVEC_LITERAL;

    pub const REASONML_LITERAL: Self = f(sep(b'_')
        | Self::REQUIRED_INTEGER_DIGITS
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::CASE_SENSITIVE_SPECIAL
        | Self::INTERNAL_DIGIT_SEPARATOR
        | Self::FRACTION_LEADING_DIGIT_SEPARATOR
        | Self::TRAILING_DIGIT_SEPARATOR
        | Self::CONSECUTIVE_DIGIT_SEPARATOR);
    pub const REASONML_STRING: Self = Self::OCAML_STRING;

    pub const OCTAVE_LITERAL: Self = f(sep(b'_')
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::CASE_SENSITIVE_SPECIAL
        | Self::INTERNAL_DIGIT_SEPARATOR
        | Self::FRACTION_LEADING_DIGIT_SEPARATOR
        | Self::TRAILING_DIGIT_SEPARATOR
        | Self::CONSECUTIVE_DIGIT_SEPARATOR);
    pub const OCTAVE_STRING: Self = f(sep(b',')
        | Self::REQUIRED_EXPONENT_DIGITS
        | Self::INTERNAL_DIGIT_SEPARATOR
        | Self::LEADING_DIGIT_SEPARATOR
        | Self::TRAILING_DIGIT_SEPARATOR
        | Self::CONSECUTIVE_DIGIT_SEPARATOR);
    pub const MATLAB_LITERAL: Self = Self::OCTAVE_LITERAL;
    pub const MATLAB_STRING: Self = Self::OCTAVE_STRING;

    pub const ZIG_LITERAL: Self = f(Self::REQUIRED_INTEGER_DIGITS
        | Self::NO_POSITIVE_MANTISSA_SIGN
        | Self::NO_SPECIAL);
    pub const ZIG_STRING: Self = f(0);

    pub const SAGE_LITERAL: Self =
        f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);
    pub const SAGE_STRING: Self =
        f(sep(b'_') | Self::REQUIRED_EXPONENT_DIGITS | Self::INTERNAL_DIGIT_SEPARATOR);

    pub const JSON: Self = f(Self::REQUIRED_DIGITS
        | Self::NO_POSITIVE_MANTISSA_SIGN
        | Self::NO_SPECIAL
        | Self::NO_FLOAT_LEADING_ZEROS);
    pub const TOML: Self =
        f(Self::REQUIRED_DIGITS | Self::NO_SPECIAL | Self::INTERNAL_DIGIT_SEPARATOR);
    pub const YAML: Self = Self::JSON;
    pub const XML: Self = f(Self::CASE_SENSITIVE_SPECIAL);
    pub const SQLITE: Self = f(Self::REQUIRED_EXPONENT_DIGITS | Self::NO_SPECIAL);
    pub const POSTGRESQL: Self = Self::SQLITE;
    pub const MYSQL: Self = Self::SQLITE;
    pub const MONGODB: Self =
        f(Self::REQUIRED_EXPONENT_DIGITS | Self::CASE_SENSITIVE_SPECIAL);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_literal() {
        let fmt = NumberFormat::RUST_LITERAL;
        assert_eq!(fmt.digit_separator(), b'_');
        assert!(fmt.required_digits());
        assert!(fmt.no_positive_mantissa_sign());
        assert!(fmt.no_special());
        assert!(fmt.integer_internal_digit_separator());
        assert!(fmt.integer_trailing_digit_separator());
        assert!(fmt.integer_consecutive_digit_separator());
        assert!(!fmt.integer_leading_digit_separator());
    }

    #[test]
    fn test_json() {
        let fmt = NumberFormat::JSON;
        assert!(fmt.required_integer_digits());
        assert!(fmt.required_fraction_digits());
        assert!(fmt.required_exponent_digits());
        assert!(fmt.no_positive_mantissa_sign());
        assert!(fmt.no_special());
        assert!(fmt.no_float_leading_zeros());
        assert!(!fmt.has_digit_separator());
        assert_eq!(NumberFormat::YAML, fmt);
    }

    #[test]
    fn test_cxx17_literal_separator() {
        let fmt = NumberFormat::CXX17_LITERAL;
        assert_eq!(fmt.digit_separator(), b'\'');
        assert!(fmt.integer_internal_digit_separator());
        assert!(fmt.case_sensitive_special());
    }

    #[test]
    fn test_octave_string_comma() {
        let fmt = NumberFormat::OCTAVE_STRING;
        assert_eq!(fmt.digit_separator(), b',');
        assert!(fmt.integer_leading_digit_separator());
        assert!(fmt.exponent_consecutive_digit_separator());
        assert!(!fmt.special_digit_separator());
    }

    #[test]
    fn test_string_variants_permissive() {
        assert_eq!(NumberFormat::PERL_STRING.bits(), 0);
        assert_eq!(NumberFormat::R_STRING.bits(), 0);
        assert_eq!(NumberFormat::ZIG_STRING.bits(), 0);
    }

    #[test]
    fn test_cobol_string_requires_exponent_sign() {
        let fmt = NumberFormat::COBOL_STRING;
        assert!(fmt.required_exponent_sign());
        assert!(fmt.no_special());
        assert!(!fmt.required_exponent_digits());
    }
}
