//! Conformance report assembly and rendering.

use serde::{Deserialize, Serialize};

/// Outcome of one fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

/// Aggregated outcome of a fixture set run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub family: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<VerificationResult>,
}

impl ConformanceReport {
    pub fn new(family: &str, results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            family: family.to_string(),
            total,
            passed,
            failed: total - passed,
            results,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.failed == 0
    }

    /// Human-readable summary with one line per failing case.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "# Conformance: {}\n\n{} total, {} passed, {} failed\n",
            self.family, self.total, self.passed, self.failed
        ));
        if self.failed > 0 {
            out.push_str("\n| case | expected | actual |\n|---|---|---|\n");
            for result in self.results.iter().filter(|r| !r.passed) {
                out.push_str(&format!(
                    "| {} | `{}` | `{}` |\n",
                    result.case_name, result.expected, result.actual
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let results = vec![
            VerificationResult {
                case_name: "a".into(),
                passed: true,
                expected: "1".into(),
                actual: "1".into(),
            },
            VerificationResult {
                case_name: "b".into(),
                passed: false,
                expected: "2".into(),
                actual: "3".into(),
            },
        ];
        let report = ConformanceReport::new("family", results);
        assert_eq!(report.total, 2);
        assert_eq!(report.failed, 1);
        let markdown = report.to_markdown();
        assert!(markdown.contains("| b | `2` | `3` |"));
        assert!(!markdown.contains("| a |"));
    }
}
