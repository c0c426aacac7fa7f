//! CLI entrypoint for the numparse conformance harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use numparse_harness::{generate, FixtureSet, HarnessError, TestRunner};

/// Conformance tooling for numparse.
#[derive(Debug, Parser)]
#[command(name = "conformance")]
#[command(about = "Conformance testing harness for numparse")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run fixture files and report mismatches.
    Run {
        /// Fixture JSON files. Empty means the built-in set.
        #[arg(long)]
        fixture: Vec<PathBuf>,
        /// Output report path. Prints to stdout when omitted.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Emit the report as pretty JSON instead of markdown.
        #[arg(long)]
        json: bool,
    },
    /// Write the built-in fixture set out as JSON.
    Generate {
        /// Output path for the fixture JSON file.
        #[arg(long)]
        output: PathBuf,
    },
}

fn run(
    fixtures: Vec<PathBuf>,
    report_path: Option<PathBuf>,
    json: bool,
) -> Result<bool, HarnessError> {
    let sets = if fixtures.is_empty() {
        vec![generate::builtin_fixture_set()]
    } else {
        fixtures
            .iter()
            .map(|path| FixtureSet::from_file(path))
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut all_passed = true;
    let mut reports = Vec::with_capacity(sets.len());
    for set in &sets {
        let report = TestRunner::run(set)?;
        all_passed &= report.is_pass();
        reports.push(report);
    }
    let mut rendered = if json {
        serde_json::to_string_pretty(&reports)?
    } else {
        reports.iter().map(|r| r.to_markdown()).collect::<Vec<_>>().join("\n")
    };
    rendered.push('\n');
    match report_path {
        Some(path) => std::fs::write(&path, rendered)
            .map_err(|source| HarnessError::Write { path, source })?,
        None => print!("{rendered}"),
    }
    Ok(all_passed)
}

fn generate_fixtures(output: PathBuf) -> Result<(), HarnessError> {
    let json = generate::builtin_fixture_set().to_json()?;
    std::fs::write(&output, json).map_err(|source| HarnessError::Write { path: output, source })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Run { fixture, report, json } => run(fixture, report, json),
        Command::Generate { output } => generate_fixtures(output).map(|()| true),
    };
    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("conformance: {error}");
            ExitCode::FAILURE
        }
    }
}
