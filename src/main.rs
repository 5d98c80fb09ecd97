//! scanup - apply dependency updates from security scan reports
//!
//! Reads a scanner's free-form report (from a file or stdin), extracts
//! the recommended dependency changes, applies the direct ones to
//! package.json, and optionally runs npm install to resynchronize the
//! lock file.

use clap::Parser;
use colored::Colorize;
use scanup::cli::CliArgs;
use scanup::error::ReportError;
use scanup::installer::NpmInstaller;
use scanup::pipeline::{self, PipelineOptions};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            // Fatal diagnostics go to stdout alongside the progress text
            println!("\n❌ {} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("scanup v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Manifest: {}", args.manifest_path().display());
    }

    let Some(report_text) = read_report(&args)? else {
        return Ok(ExitCode::FAILURE);
    };

    let options = PipelineOptions::from_cli(&args);
    let installer = NpmInstaller::new();
    let summary = pipeline::run(&report_text, &options, &installer)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(ExitCode::SUCCESS)
}

/// Read the report from the given file, or from piped stdin
///
/// Returns None when stdin is a terminal and no file was given; the
/// caller exits with a failure status after the usage hint.
fn read_report(args: &CliArgs) -> anyhow::Result<Option<String>> {
    if let Some(path) = &args.file {
        if !path.exists() {
            return Err(ReportError::input_not_found(path).into());
        }
        let text =
            fs::read_to_string(path).map_err(|e| ReportError::read_error(path.clone(), e))?;
        return Ok(Some(text));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        println!("No input provided. Usage:");
        println!("  <scanner> repo scan | scanup");
        println!("  scanup --file <path-to-scan-report>");
        return Ok(None);
    }

    let mut text = String::new();
    stdin
        .lock()
        .read_to_string(&mut text)
        .map_err(|e| ReportError::read_error("<stdin>", e))?;
    Ok(Some(text))
}
