//! CSV record sink for the combined, date-sorted transaction list.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use cardstmt_core::types::Transaction;

/// Write one row per transaction with a header row. An empty input writes
/// nothing at all; that is reported, not an error.
pub fn write_transactions(path: &Path, transactions: &[Transaction]) -> Result<()> {
    if transactions.is_empty() {
        info!("no transactions to write");
        return Ok(());
    }

    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    writer.write_record(["date", "reference", "description", "amount", "source"])?;
    for txn in transactions {
        writer.write_record([
            txn.date.format("%m/%d/%Y").to_string(),
            txn.reference.clone(),
            txn.description.clone(),
            format!("{:.2}", txn.amount),
            txn.source.clone(),
        ])?;
    }
    writer.flush()?;

    println!(
        "Wrote {} transactions to {}",
        transactions.len(),
        path.display()
    );
    Ok(())
}
