//! Integer formatting: repeated division into a scratch buffer, then one
//! copy into the caller's slice.

use crate::num::Integer;
use crate::options::WriteIntegerOptions;
use crate::write::DIGIT_TABLE;

// i64::MIN in radix 2 with its sign is the longest possible output.
const SCRATCH_SIZE: usize = 65;

/// Render the magnitude of `value` into the tail of `scratch`, most
/// significant digit first. Returns the start offset.
pub(crate) fn write_magnitude(mut magnitude: u64, radix: u32, scratch: &mut [u8]) -> usize {
    let radix = radix as u64;
    let mut pos = scratch.len();
    loop {
        pos -= 1;
        scratch[pos] = DIGIT_TABLE[(magnitude % radix) as usize];
        magnitude /= radix;
        if magnitude == 0 {
            return pos;
        }
    }
}

/// Format `value` into the front of `buffer` and return the written
/// sub-slice. Panics if `buffer` is shorter than the formatted value;
/// `FORMATTED_SIZE` bytes always suffice.
pub(crate) fn write<'a, T: Integer>(
    value: T,
    options: &WriteIntegerOptions,
    buffer: &'a mut [u8],
) -> &'a mut [u8] {
    let mut scratch = [0u8; SCRATCH_SIZE];
    let mut pos = write_magnitude(value.magnitude(), options.radix(), &mut scratch);
    if value.is_negative() {
        pos -= 1;
        scratch[pos] = b'-';
    }
    let formatted = &scratch[pos..];
    let out = &mut buffer[..formatted.len()];
    out.copy_from_slice(formatted);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::FormattedSize;

    fn to_string<T: Integer>(value: T, options: &WriteIntegerOptions) -> String {
        let mut buffer = [0u8; 65];
        String::from_utf8_lossy(write(value, options, &mut buffer)).into_owned()
    }

    #[test]
    fn test_write_decimal() {
        let options = WriteIntegerOptions::decimal();
        assert_eq!(to_string(0u8, &options), "0");
        assert_eq!(to_string(10u32, &options), "10");
        assert_eq!(to_string(u64::MAX, &options), "18446744073709551615");
        assert_eq!(to_string(-1234i32, &options), "-1234");
        assert_eq!(to_string(i64::MIN, &options), "-9223372036854775808");
        assert_eq!(to_string(i8::MIN, &options), "-128");
    }

    #[test]
    fn test_write_radix() {
        let binary = WriteIntegerOptions::binary();
        assert_eq!(to_string(5u8, &binary), "101");
        assert_eq!(to_string(-10i32, &binary), "-1010");
        let hex = WriteIntegerOptions::hexadecimal();
        assert_eq!(to_string(255u32, &hex), "FF");
        assert_eq!(to_string(0xDEADu32, &hex), "DEAD");
        let base36 = WriteIntegerOptions::builder().radix(36).build().unwrap();
        assert_eq!(to_string(1234u32, &base36), "YA");
        assert_eq!(to_string(35u32, &base36), "Z");
    }

    #[test]
    fn test_formatted_size_bounds() {
        // The worst case for each type must fit in FORMATTED_SIZE bytes.
        let binary = WriteIntegerOptions::binary();
        let mut buffer = [0u8; 65];
        assert_eq!(write(u64::MAX, &binary, &mut buffer).len(), u64::FORMATTED_SIZE);
        assert_eq!(write(i64::MIN, &binary, &mut buffer).len(), i64::FORMATTED_SIZE);
        assert_eq!(write(u8::MAX, &binary, &mut buffer).len(), u8::FORMATTED_SIZE);
        let decimal = WriteIntegerOptions::decimal();
        assert_eq!(
            write(i32::MIN, &decimal, &mut buffer).len(),
            i32::FORMATTED_SIZE_DECIMAL
        );
    }

    #[test]
    #[should_panic]
    fn test_write_undersized_buffer() {
        let options = WriteIntegerOptions::decimal();
        let mut buffer = [0u8; 2];
        write(100u32, &options, &mut buffer);
    }
}
