//! Built-in fixture set covering the documented conversion behavior.

use crate::fixtures::{FixtureCase, FixtureSet};

fn case(name: &str, operation: &str, input: &str, radix: u32, expected: &str) -> FixtureCase {
    FixtureCase {
        name: name.into(),
        operation: operation.into(),
        input: input.into(),
        radix,
        expected: expected.into(),
    }
}

/// The reference cases shipped with the harness. `generate` writes these
/// out as a starting point for external fixture files.
pub fn builtin_fixture_set() -> FixtureSet {
    let cases = vec![
        // Integer parsing.
        case("u64_zero", "parse_u64", "0", 10, "0"),
        case("u64_max", "parse_u64", "18446744073709551615", 10, "18446744073709551615"),
        case("u64_overflow", "parse_u64", "18446744073709551616", 10, "error: Overflow @ 19"),
        case("i64_min", "parse_i64", "-9223372036854775808", 10, "-9223372036854775808"),
        case("i64_trailing", "parse_i64", "12x", 10, "error: InvalidDigit @ 2"),
        case("u64_hex", "parse_u64", "deadbeef", 16, "3735928559"),
        case("u64_binary", "parse_u64", "101", 2, "5"),
        case("u64_empty", "parse_u64", "", 10, "error: Empty @ 0"),
        // Float parsing.
        case("f64_simple", "parse_f64", "10.5", 10, "10.5"),
        case("f64_negative", "parse_f64", "-4.02", 10, "-4.02"),
        case("f64_exponent", "parse_f64", "1.2345e10", 10, "12345000000.0"),
        case("f64_tiny", "parse_f64", "5e-324", 10, "5e-324"),
        case("f64_huge", "parse_f64", "2e400", 10, "inf"),
        case("f64_nan", "parse_f64", "NaN", 10, "NaN"),
        case("f64_infinity", "parse_f64", "-infinity", 10, "-inf"),
        case("f64_empty_exponent", "parse_f64", "0e", 10, "error: EmptyExponent @ 2"),
        case("f64_signed_empty_exponent", "parse_f64", "10e+", 10, "error: EmptyExponent @ 3"),
        case("f64_empty_mantissa", "parse_f64", ".", 10, "error: EmptyMantissa @ 0"),
        case("f32_narrowing", "parse_f32", "1.2345678901234567", 10, "1.2345679"),
        case("f64_hex", "parse_f64", "ff.8", 16, "255.5"),
        // Integer writing.
        case("write_u64_plain", "write_u64", "1234", 10, "1234"),
        case("write_u64_hex", "write_u64", "255", 16, "FF"),
        case("write_u64_base36", "write_u64", "1234", 36, "YA"),
        case("write_i64_negative", "write_i64", "-1010", 2, "-1111110010"),
        // Float writing.
        case("write_f64_positional", "write_f64", "0.1", 10, "0.1"),
        case("write_f64_scientific", "write_f64", "1e30", 10, "1e30"),
        case("write_f64_max", "write_f64", "1.7976931348623157e308", 10, "1.7976931348623157e308"),
    ];
    FixtureSet {
        version: "1".into(),
        family: "builtin".into(),
        cases,
    }
}
