//! Conformance testing harness for numparse.
//!
//! This crate provides:
//! - Fixture files: JSON case sets describing conversion inputs and the
//!   expected output or error
//! - A runner that executes cases against `numparse-core`
//! - Report generation: pass/fail counts plus a markdown failure table

#![forbid(unsafe_code)]

pub mod error;
pub mod fixtures;
pub mod generate;
pub mod report;
pub mod runner;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::{ConformanceReport, VerificationResult};
pub use runner::TestRunner;
