use std::{env, fs, process::ExitCode};

use anyhow::{Context, Result};
use log::debug;

use reporter::Reporter;

mod reporter;
mod scanner;
mod source_map;

/// Exit code for command-line usage errors.
const EXIT_USAGE: u8 = 64;
/// Exit code for source files containing lexical errors.
const EXIT_LEX_ERROR: u8 = 65;

fn main() -> ExitCode {
    if let Err(err) = stderrlog::new().verbosity(2).init() {
        eprintln!("Failed to initialise logging: {}", err);
    }

    let args: Vec<_> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: rulox [script]");
        return ExitCode::from(EXIT_USAGE);
    }

    let mut reporter = Reporter::new();
    match run_file(&args[1], &mut reporter) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_LEX_ERROR),
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Scans a single source file, printing its token stream on a clean scan
/// and every diagnostic otherwise. Returns whether the scan was clean.
fn run_file(path: &str, reporter: &mut Reporter) -> Result<bool> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Couldn't read source file '{}'", path))?;

    reporter.reset();
    let outcome = scanner::scan(&source);
    debug!(
        "Scanned {} tokens, {} errors",
        outcome.tokens.len(),
        outcome.errors.len()
    );

    for error in &outcome.errors {
        reporter.describe(error, &source);
    }

    if !outcome.has_errors() {
        for token in &outcome.tokens {
            println!("{}", token);
        }
    }

    Ok(!reporter.had_error())
}
