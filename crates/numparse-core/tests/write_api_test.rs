//! Integration test: write entry points and round-trip identity
//!
//! Exercises the public write surface and checks that formatted output
//! reparses to the identical value.
//!
//! Run: cargo test -p numparse-core --test write_api_test

use numparse_core::options::{WriteFloatOptions, WriteIntegerOptions};
use numparse_core::{FormattedSize, BUFFER_SIZE};

// ---------------------------------------------------------------------------
// 1. Integer formatting
// ---------------------------------------------------------------------------

#[test]
fn write_integers() {
    let mut buffer = [0u8; BUFFER_SIZE];
    assert_eq!(numparse_core::write(0u8, &mut buffer), b"0");
    assert_eq!(numparse_core::write(i32::MIN, &mut buffer), b"-2147483648");
    assert_eq!(numparse_core::write(u64::MAX, &mut buffer), b"18446744073709551615");

    let hex = WriteIntegerOptions::hexadecimal();
    assert_eq!(numparse_core::write_with_options(255u32, &hex, &mut buffer), b"FF");
    let binary = WriteIntegerOptions::binary();
    assert_eq!(numparse_core::write_with_options(-5i8, &binary, &mut buffer), b"-101");
}

#[test]
fn write_fits_formatted_size() {
    let binary = WriteIntegerOptions::binary();
    let mut buffer = [0u8; BUFFER_SIZE];
    assert!(numparse_core::write_with_options(u64::MAX, &binary, &mut buffer).len() <= u64::FORMATTED_SIZE);
    assert!(numparse_core::write_with_options(i64::MIN, &binary, &mut buffer).len() <= i64::FORMATTED_SIZE);
    assert!(numparse_core::write(i64::MIN, &mut buffer).len() <= i64::FORMATTED_SIZE_DECIMAL);
}

// ---------------------------------------------------------------------------
// 2. Float formatting
// ---------------------------------------------------------------------------

#[test]
fn write_floats() {
    let mut buffer = [0u8; BUFFER_SIZE];
    assert_eq!(numparse_core::write(10.5f64, &mut buffer), b"10.5");
    assert_eq!(numparse_core::write(-0.25f64, &mut buffer), b"-0.25");
    assert_eq!(numparse_core::write(1e30f64, &mut buffer), b"1e30");
    assert_eq!(numparse_core::write(f64::INFINITY, &mut buffer), b"inf");
    assert_eq!(numparse_core::write(1.25f32, &mut buffer), b"1.25");
}

#[test]
fn write_trimmed_floats() {
    let options = WriteFloatOptions::builder().trim_floats(true).build().unwrap();
    let mut buffer = [0u8; BUFFER_SIZE];
    assert_eq!(numparse_core::write_with_options(3.0f64, &options, &mut buffer), b"3");
    assert_eq!(numparse_core::write_with_options(3.5f64, &options, &mut buffer), b"3.5");
}

// ---------------------------------------------------------------------------
// 3. Round-trip identity: write then parse gives back the same value
// ---------------------------------------------------------------------------

#[test]
fn round_trip_integers() {
    let mut buffer = [0u8; BUFFER_SIZE];
    for value in [i64::MIN, -1, 0, 1, 42, i64::MAX] {
        let text = numparse_core::write(value, &mut buffer).to_vec();
        assert_eq!(numparse_core::parse::<i64>(&text), Ok(value));
    }
    let hex_write = WriteIntegerOptions::hexadecimal();
    let hex_parse = numparse_core::options::ParseIntegerOptions::hexadecimal();
    for value in [0u64, 0xDEAD_BEEF, u64::MAX] {
        let text = numparse_core::write_with_options(value, &hex_write, &mut buffer).to_vec();
        assert_eq!(numparse_core::parse_with_options::<u64>(&text, &hex_parse), Ok(value));
    }
}

#[test]
fn round_trip_floats() {
    let mut buffer = [0u8; BUFFER_SIZE];
    let values = [
        0.0f64,
        -0.0,
        0.1,
        1.0 / 3.0,
        6.02214076e23,
        -2.2250738585072014e-308,
        5e-324,
        f64::MAX,
        f64::MIN,
    ];
    for value in values {
        let text = numparse_core::write(value, &mut buffer).to_vec();
        let reparsed: f64 = numparse_core::parse(&text).unwrap();
        assert_eq!(reparsed.to_bits(), value.to_bits());
    }
}

#[test]
fn round_trip_floats_nondecimal() {
    let mut buffer = [0u8; BUFFER_SIZE];
    let write_hex = WriteFloatOptions::hexadecimal();
    let parse_hex = numparse_core::options::ParseFloatOptions::hexadecimal();
    for value in [1.0f64, 255.5, 0.0625, -1.5e-10, 1e100] {
        let text = numparse_core::write_with_options(value, &write_hex, &mut buffer).to_vec();
        let reparsed: f64 =
            numparse_core::parse_with_options(&text, &parse_hex).unwrap();
        assert_eq!(reparsed.to_bits(), value.to_bits(), "{}", String::from_utf8_lossy(&text));
    }
}

#[test]
fn round_trip_f32() {
    let mut buffer = [0u8; BUFFER_SIZE];
    for value in [0.1f32, 16777217.0, f32::MAX, f32::MIN_POSITIVE, f32::from_bits(1)] {
        let text = numparse_core::write(value, &mut buffer).to_vec();
        let reparsed: f32 = numparse_core::parse(&text).unwrap();
        assert_eq!(reparsed.to_bits(), value.to_bits());
    }
}
