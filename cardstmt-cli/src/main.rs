use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use cardstmt_core::types::{Transaction, VerificationResult};
use cardstmt_core::verify::verify;
use cardstmt_ingest::{parse_statement, read_pages};

mod csv_out;

#[derive(Parser, Debug)]
#[command(
    name = "cardstmt",
    version,
    about = "Extract transactions from credit-card statement PDFs and reconcile them"
)]
struct Cli {
    /// PDF statement files to process
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output CSV file
    #[arg(short, long, default_value = "card_transactions.csv")]
    output: PathBuf,
}

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "run failed");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let today = Local::now().date_naive();

    let mut all_transactions: Vec<Transaction> = Vec::new();
    let mut results: Vec<VerificationResult> = Vec::new();

    for path in &cli.files {
        let filename = statement_name(path);

        if !path.exists() {
            warn!(file = %path.display(), "file not found");
            results.push(VerificationResult {
                filename,
                passed: false,
            });
            continue;
        }

        println!("Processing {}...", path.display());
        match process_file(path, &filename, today) {
            Ok((transactions, result)) => {
                all_transactions.extend(transactions);
                results.push(result);
            }
            // One bad statement never aborts the run; it just contributes
            // nothing and fails verification.
            Err(err) => {
                warn!(file = %path.display(), error = %err, "failed to process statement");
                results.push(VerificationResult {
                    filename,
                    passed: false,
                });
            }
        }
    }

    all_transactions.sort_by_key(|txn| txn.date);
    csv_out::write_transactions(&cli.output, &all_transactions)?;

    println!("\n=== Verification Summary ===");
    let mut all_passed = true;
    for result in &results {
        let status = if result.passed { "PASSED" } else { "FAILED" };
        println!("{}: {status}", result.filename);
        if !result.passed {
            all_passed = false;
        }
    }

    if all_passed {
        println!("\nALL FILES PASSED VERIFICATION");
    } else {
        println!("\nSOME FILES FAILED VERIFICATION - check the per-file reports above");
    }

    Ok(())
}

fn process_file(
    path: &Path,
    filename: &str,
    today: NaiveDate,
) -> Result<(Vec<Transaction>, VerificationResult)> {
    let pages = read_pages(path)?;
    let outcome = parse_statement(&pages, filename, today)?;
    let result = verify(filename, &outcome.transactions, outcome.summary.as_ref());
    Ok((outcome.transactions, result))
}

fn statement_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
