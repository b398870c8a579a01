//! `widebits-selftest`: replays the built-in vector tables.
//!
//! Runs the self-test against one or every primitive backend and prints a
//! `[PASS]`/`[FAIL]` line per case, or the reports as JSON.
//!
//! **Usage:**
//! ```text
//! widebits-selftest [--backend native|arithmetic|all] [--format text|json]
//! ```
//!
//! Exits non-zero if any case fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use widebits::selftest::{self, SelftestReport};
use widebits::Backend;

/// Which backends to exercise.
#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    Native,
    Arithmetic,
    All,
}

impl BackendArg {
    fn backends(self) -> Vec<Backend> {
        match self {
            BackendArg::Native => vec![Backend::Native],
            BackendArg::Arithmetic => vec![Backend::Arithmetic],
            BackendArg::All => Backend::ALL.to_vec(),
        }
    }
}

/// Output format.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Run the widebits self-test.
#[derive(Parser)]
#[command(
    name = "widebits-selftest",
    version = widebits::VERSION,
    about = "Replay the widebits vector tables against the primitive backends"
)]
struct Args {
    /// Backend to test.
    #[arg(long, value_enum, default_value = "all")]
    backend: BackendArg,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

fn print_text(report: &SelftestReport) {
    println!("widebits self-test ({} backend)", report.backend);
    println!("==================================");
    for result in &report.results {
        let status = if result.passed { "PASS" } else { "FAIL" };
        println!("[{}] {} {}", status, result.group, result.name);
        if let Some(detail) = &result.detail {
            println!("       {}", detail);
        }
    }
    println!(
        "Summary: {} passed, {} failed",
        report.passed_count(),
        report.failure_count()
    );
    println!();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let reports: Vec<SelftestReport> = args
        .backend
        .backends()
        .into_iter()
        .map(selftest::run)
        .collect();

    match args.format {
        Format::Text => reports.iter().for_each(print_text),
        Format::Json => {
            let json =
                serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?;
            println!("{json}");
        }
    }

    let failed: usize = reports.iter().map(SelftestReport::failure_count).sum();
    if failed > 0 {
        eprintln!("Self-test FAILED: {} case(s) did not pass.", failed);
        process::exit(1);
    }

    if matches!(args.format, Format::Text) {
        println!("Self-test PASSED.");
    }
    Ok(())
}
