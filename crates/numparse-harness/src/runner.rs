//! Fixture execution engine.

use numparse_core::options::{
    ParseFloatOptions, ParseIntegerOptions, WriteFloatOptions, WriteIntegerOptions,
};
use numparse_core::BUFFER_SIZE;

use crate::error::HarnessError;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::report::{ConformanceReport, VerificationResult};

/// Runs fixture sets against the conversion routines.
pub struct TestRunner;

impl TestRunner {
    /// Run every case in a set and collect the results into a report.
    pub fn run(fixture_set: &FixtureSet) -> Result<ConformanceReport, HarnessError> {
        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let actual = execute_case(case)?;
            results.push(VerificationResult {
                case_name: case.name.clone(),
                passed: actual == case.expected,
                expected: case.expected.clone(),
                actual,
            });
        }
        Ok(ConformanceReport::new(&fixture_set.family, results))
    }
}

fn render_error(error: numparse_core::Error) -> String {
    format!("error: {:?} @ {}", error.code(), error.index())
}

fn int_parse_options(case: &FixtureCase) -> Result<ParseIntegerOptions, HarnessError> {
    ParseIntegerOptions::builder()
        .radix(case.radix)
        .build()
        .ok_or_else(|| HarnessError::InvalidOptions { case: case.name.clone(), radix: case.radix })
}

fn float_parse_options(case: &FixtureCase) -> Result<ParseFloatOptions, HarnessError> {
    let mut builder = ParseFloatOptions::builder().radix(case.radix);
    // Decimal digits swallow 'e'; follow the C convention of 'p' there.
    if case.radix >= 15 {
        builder = builder.exponent_char(b'p');
    }
    builder
        .build()
        .ok_or_else(|| HarnessError::InvalidOptions { case: case.name.clone(), radix: case.radix })
}

fn int_write_options(case: &FixtureCase) -> Result<WriteIntegerOptions, HarnessError> {
    WriteIntegerOptions::builder()
        .radix(case.radix)
        .build()
        .ok_or_else(|| HarnessError::InvalidOptions { case: case.name.clone(), radix: case.radix })
}

fn float_write_options(case: &FixtureCase) -> Result<WriteFloatOptions, HarnessError> {
    let mut builder = WriteFloatOptions::builder().radix(case.radix);
    if case.radix >= 15 {
        builder = builder.exponent_char(b'p');
    }
    builder
        .build()
        .ok_or_else(|| HarnessError::InvalidOptions { case: case.name.clone(), radix: case.radix })
}

/// Execute one case. Parse operations render the parsed value back in
/// canonical decimal form; write operations take a decimal input and
/// render it under the case radix.
fn execute_case(case: &FixtureCase) -> Result<String, HarnessError> {
    let input = case.input.as_bytes();
    let mut buffer = [0u8; BUFFER_SIZE];
    let actual = match case.operation.as_str() {
        "parse_u64" => {
            let options = int_parse_options(case)?;
            match numparse_core::parse_with_options::<u64>(input, &options) {
                Ok(value) => value.to_string(),
                Err(error) => render_error(error),
            }
        }
        "parse_i64" => {
            let options = int_parse_options(case)?;
            match numparse_core::parse_with_options::<i64>(input, &options) {
                Ok(value) => value.to_string(),
                Err(error) => render_error(error),
            }
        }
        "parse_f64" => {
            let options = float_parse_options(case)?;
            match numparse_core::parse_with_options::<f64>(input, &options) {
                Ok(value) => String::from_utf8_lossy(numparse_core::write(value, &mut buffer))
                    .into_owned(),
                Err(error) => render_error(error),
            }
        }
        "parse_f32" => {
            let options = float_parse_options(case)?;
            match numparse_core::parse_with_options::<f32>(input, &options) {
                Ok(value) => String::from_utf8_lossy(numparse_core::write(value, &mut buffer))
                    .into_owned(),
                Err(error) => render_error(error),
            }
        }
        "write_u64" => {
            let options = int_write_options(case)?;
            match case.input.parse::<u64>() {
                Ok(value) => String::from_utf8_lossy(numparse_core::write_with_options(
                    value, &options, &mut buffer,
                ))
                .into_owned(),
                Err(error) => format!("bad input: {error}"),
            }
        }
        "write_i64" => {
            let options = int_write_options(case)?;
            match case.input.parse::<i64>() {
                Ok(value) => String::from_utf8_lossy(numparse_core::write_with_options(
                    value, &options, &mut buffer,
                ))
                .into_owned(),
                Err(error) => format!("bad input: {error}"),
            }
        }
        "write_f64" => {
            let options = float_write_options(case)?;
            match case.input.parse::<f64>() {
                Ok(value) => String::from_utf8_lossy(numparse_core::write_with_options(
                    value, &options, &mut buffer,
                ))
                .into_owned(),
                Err(error) => format!("bad input: {error}"),
            }
        }
        other => return Err(HarnessError::UnknownOperation(other.to_string())),
    };
    Ok(actual)
}
