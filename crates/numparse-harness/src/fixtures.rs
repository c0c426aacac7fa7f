//! Fixture loading and management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

fn default_radix() -> u32 {
    10
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Operation under test, e.g. `parse_f64` or `write_u64`.
    pub operation: String,
    /// Input text handed to the operation.
    pub input: String,
    /// Radix for the operation. Defaults to 10.
    #[serde(default = "default_radix")]
    pub radix: u32,
    /// Expected output: the canonical rendering of the value, or
    /// `error: <Code> @ <index>` for expected parse failures.
    pub expected: String,
}

/// A collection of fixture cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Name of the case family.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load a fixture set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a fixture set from a file.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|source| HarnessError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_json_round_trip() {
        let set = FixtureSet {
            version: "1".into(),
            family: "parse".into(),
            cases: vec![FixtureCase {
                name: "u8_max".into(),
                operation: "parse_u64".into(),
                input: "255".into(),
                radix: 10,
                expected: "255".into(),
            }],
        };
        let json = set.to_json().unwrap();
        let back = FixtureSet::from_json(&json).unwrap();
        assert_eq!(back.cases.len(), 1);
        assert_eq!(back.cases[0].name, "u8_max");
    }

    #[test]
    fn test_radix_defaults_to_ten() {
        let json = r#"{
            "version": "1",
            "family": "parse",
            "cases": [{
                "name": "plain",
                "operation": "parse_i64",
                "input": "-42",
                "expected": "-42"
            }]
        }"#;
        let set = FixtureSet::from_json(json).unwrap();
        assert_eq!(set.cases[0].radix, 10);
    }
}
